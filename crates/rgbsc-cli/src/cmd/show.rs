use clap::Args;
use rgbsc_core::{Codec, ColorState, Encoder};

use crate::io::profile_file;

#[derive(Args)]
pub struct ShowArgs {
    /// Text to encode
    #[arg(long)]
    pub text: String,

    /// Codec profile (.rgbp). If omitted, uses the standard profile.
    #[arg(long)]
    pub profile: Option<String>,

    /// Leave the channel open: do not append the closing Dark
    #[arg(long)]
    pub no_close: bool,
}

pub fn run(args: ShowArgs) -> anyhow::Result<()> {
    let profile = profile_file::load_or_standard(args.profile.as_deref())?;
    let mut enc = Encoder::new(Codec::new(&profile)?);

    for &b in args.text.as_bytes() {
        let colors = enc.push_byte(b);
        println!("{} | {}", describe_byte(b), colors.map(ColorState::marked).concat());
    }
    if !args.no_close {
        enc.close();
        println!("{:<17} | {}", "close", ColorState::Dark.marked());
    }

    let seq = enc.finish();
    println!("{}", seq.to_short_string());
    Ok(())
}

/// `48 'H' = 01001000`
fn describe_byte(b: u8) -> String {
    let shown = if b.is_ascii_graphic() || b == b' ' { b as char } else { '.' };
    format!("{b:02x} '{shown}' = {b:08b}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_byte_layout() {
        assert_eq!(describe_byte(b'H'), "48 'H' = 01001000");
        assert_eq!(describe_byte(0x0A), "0a '.' = 00001010");
    }
}
