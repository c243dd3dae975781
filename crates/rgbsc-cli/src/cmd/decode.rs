use clap::Args;
use rgbsc_core::profile::format::profile_id_hex;
use rgbsc_core::Codec;

use super::encode::ColorFmt;
use crate::io::{profile_file, rgbs, text};

#[derive(Args)]
pub struct DecodeArgs {
    /// Input color sequence (.rgbs or text)
    #[arg(long)]
    pub r#in: String,

    /// Output decoded file path
    #[arg(long)]
    pub out: String,

    /// Input format
    #[arg(long, value_enum, default_value_t = ColorFmt::Rgbs)]
    pub fmt: ColorFmt,

    /// Codec profile (.rgbp). Text input uses the standard profile without it;
    /// .rgbs input uses its embedded profile unless this overrides it.
    #[arg(long)]
    pub profile: Option<String>,
}

pub fn run(args: DecodeArgs) -> anyhow::Result<()> {
    let (profile, seq) = match args.fmt {
        ColorFmt::Rgbs => {
            let art = rgbs::read_rgbs(&args.r#in)?;
            let profile = match args.profile.as_deref() {
                Some(p) => {
                    tracing::info!(embedded = %art.profile_id, "overriding embedded profile");
                    profile_file::load_rgbp(p)?
                }
                None => art.profile,
            };
            (profile, art.colors)
        }
        ColorFmt::Text => (
            profile_file::load_or_standard(args.profile.as_deref())?,
            text::read_text_colors(&args.r#in)?,
        ),
    };

    let codec = Codec::new(&profile)?;
    let out = codec.decode_stream(&seq)?;

    std::fs::write(&args.out, &out.bytes)?;
    eprintln!(
        "decode ok: out={} bytes={} colors={} consumed={} closed={} idle={} alt_marks={} short_bytes={} profile_id={}",
        args.out,
        out.bytes.len(),
        seq.len(),
        out.consumed,
        out.closed,
        out.idle,
        out.alt_marks,
        out.short_bytes,
        profile_id_hex(&profile)
    );
    if out.consumed < seq.len() {
        tracing::warn!(
            ignored = seq.len() - out.consumed,
            "colors after channel close were ignored"
        );
    }
    Ok(())
}
