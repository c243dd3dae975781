// crates/rgbsc-cli/src/cmd/sim.rs
//
// Receiver simulation: the emitter's colors are held for a varying number of
// samples before the decoder sees them. Output must match input exactly.

use clap::Args;
use rgbsc_core::signal::sample::{hold_pattern, oversample};
use rgbsc_core::{encode_bytes, Codec};

use crate::io::profile_file;

#[derive(Args, Debug)]
pub struct SimArgs {
    /// Text to transmit
    #[arg(long, default_value = "HELLO WORLD")]
    pub text: String,

    /// Codec profile (.rgbp). If omitted, uses the standard profile.
    #[arg(long)]
    pub profile: Option<String>,

    /// Longest run of identical samples per emitted color
    #[arg(long, default_value_t = 4)]
    pub max_hold: u32,

    /// Seed for the hold pattern
    #[arg(long, default_value_t = 1)]
    pub seed: u64,

    /// Print the sampled color stream
    #[arg(long)]
    pub dump: bool,
}

pub fn run(args: SimArgs) -> anyhow::Result<()> {
    let profile = profile_file::load_or_standard(args.profile.as_deref())?;
    let codec = Codec::new(&profile)?;

    let sent = encode_bytes(&codec, args.text.as_bytes(), true);
    let holds = hold_pattern(args.seed, sent.len(), args.max_hold);
    let sampled = oversample(&sent, &holds);
    tracing::debug!(sent = sent.len(), sampled = sampled.len(), "oversampled");

    if args.dump {
        println!("{}", sampled.to_short_string());
    }

    let out = codec.decode_stream(&sampled)?;
    let received = String::from_utf8_lossy(&out.bytes);
    println!("{received}");

    if out.bytes != args.text.as_bytes() {
        anyhow::bail!(
            "sim mismatch: sent {} bytes, received {} bytes",
            args.text.len(),
            out.bytes.len()
        );
    }

    eprintln!(
        "sim ok: bytes={} emitted={} sampled={} idle={} seed={} max_hold={}",
        out.bytes.len(),
        sent.len(),
        sampled.len(),
        out.idle,
        args.seed,
        args.max_hold
    );
    Ok(())
}
