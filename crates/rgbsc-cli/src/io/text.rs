// crates/rgbsc-cli/src/io/text.rs

use anyhow::{Context, Result};
use rgbsc_core::ColorSequence;

/// Short codes per line in text output.
const LINE_CODES: usize = 40;

/// Text form: one letter per color (D B G C R M Y W), whitespace ignored on read.
pub fn read_text_colors(path: &str) -> Result<ColorSequence> {
    let s = std::fs::read_to_string(path).with_context(|| format!("read colors text {path}"))?;
    let seq = ColorSequence::parse_short(&s).with_context(|| format!("parse colors text {path}"))?;
    Ok(seq)
}

pub fn write_text_colors(path: &str, seq: &ColorSequence) -> Result<()> {
    std::fs::write(path, format_lines(seq)).with_context(|| format!("write colors text {path}"))?;
    Ok(())
}

fn format_lines(seq: &ColorSequence) -> String {
    let mut s = String::with_capacity(seq.len() * 2 + seq.len() / LINE_CODES + 1);
    for line in seq.chunks(LINE_CODES) {
        let codes: Vec<String> = line.iter().map(|c| c.short().to_string()).collect();
        s.push_str(&codes.join(" "));
        s.push('\n');
    }
    s
}
