// crates/rgbsc-cli/src/cmd/table.rs
//
// Exhaustive transition check: every symbol after every previous color must
// decode back to itself and must not repeat the previous color.

use clap::Args;
use rgbsc_core::{Codec, ColorState, Symbol};

use crate::io::profile_file;

#[derive(Args)]
pub struct TableArgs {
    /// Codec profile (.rgbp). If omitted, uses the standard profile.
    #[arg(long)]
    pub profile: Option<String>,
}

pub fn run(args: TableArgs) -> anyhow::Result<()> {
    let profile = profile_file::load_or_standard(args.profile.as_deref())?;
    let codec = Codec::new(&profile)?;

    let mut failures = 0usize;
    println!("ok rt nr | sym in out | prev     -> next");
    for prev in ColorState::ALL {
        println!("# prev = {} (offset {})", prev, codec.offset_for(prev));
        for sym in Symbol::ALL {
            let next = codec.next_color(sym, prev);
            let back = codec.recover_symbol(next, prev);
            let roundtrip = back == Ok(sym);
            let no_repeat = next != prev;
            let out = match back {
                Ok(s) => s.value().to_string(),
                Err(sig) => format!("{sig:?}"),
            };
            if !(roundtrip && no_repeat) {
                failures += 1;
            }
            println!(
                "{}  {}  {}  |  {}   {:<3}| {:<8} -> {}",
                if roundtrip && no_repeat { "+" } else { "!" },
                roundtrip as u8,
                no_repeat as u8,
                sym.value(),
                out,
                prev.name(),
                next.name()
            );
        }
    }

    if failures > 0 {
        anyhow::bail!("transition table check failed: {failures} bad entries");
    }
    eprintln!("table ok: entries={}", ColorState::ALL.len() * Symbol::ALL.len());
    Ok(())
}
