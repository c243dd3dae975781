use clap::{Args, ValueEnum};
use rgbsc_core::profile::format::profile_id_hex;
use rgbsc_core::{Codec, Encoder};

use crate::io::{profile_file, rgbs, text};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorFmt {
    /// Binary artifact: embedded profile + 3-bit packed colors + crc32
    Rgbs,
    /// One short code per color (D B G C R M Y W)
    Text,
}

#[derive(Args)]
pub struct EncodeArgs {
    /// Input file to encode
    #[arg(long)]
    pub r#in: String,

    /// Output path
    #[arg(long)]
    pub out: String,

    /// Codec profile (.rgbp). If omitted, uses the standard profile.
    #[arg(long)]
    pub profile: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = ColorFmt::Rgbs)]
    pub fmt: ColorFmt,

    /// Compress the .rgbs color payload with zstd
    #[arg(long)]
    pub zstd: bool,

    /// Zstd compression level (1..=22 typical)
    #[arg(long, default_value_t = 3)]
    pub zstd_level: i32,

    /// Leave the channel open: do not append the closing Dark
    #[arg(long)]
    pub no_close: bool,
}

pub fn run(args: EncodeArgs) -> anyhow::Result<()> {
    let plain = std::fs::read(&args.r#in)?;
    let profile = profile_file::load_or_standard(args.profile.as_deref())?;
    let codec = Codec::new(&profile)?;

    let mut enc = Encoder::new(codec);
    enc.push_bytes(&plain);
    if !args.no_close {
        enc.close();
    }
    let in_bytes = enc.bytes_encoded();
    let seq = enc.finish();
    tracing::info!(bytes = in_bytes, colors = seq.len(), "encoded");

    let out_bytes = match args.fmt {
        ColorFmt::Rgbs => {
            let level = args.zstd.then_some(args.zstd_level);
            rgbs::write_rgbs(&args.out, &profile, &seq, level)?
        }
        ColorFmt::Text => {
            if args.zstd {
                tracing::warn!("--zstd ignored for text output");
            }
            text::write_text_colors(&args.out, &seq)?;
            std::fs::metadata(&args.out)?.len() as usize
        }
    };

    eprintln!(
        "encode ok: in_bytes={} colors={} out={} out_bytes={} fmt={:?} profile_id={}",
        in_bytes,
        seq.len(),
        args.out,
        out_bytes,
        args.fmt,
        profile_id_hex(&profile)
    );
    Ok(())
}
