use clap::Args;
use rgbsc_core::{Codec, ColorState};

use crate::io::rgbs;

#[derive(Args)]
pub struct InspectArgs {
    /// Input .rgbs path
    #[arg(long)]
    pub r#in: String,
}

pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    let art = rgbs::read_rgbs(&args.r#in)?;
    let p = &art.profile;
    let n = art.colors.len() as u64;
    let codec = Codec::new(p)?;
    let h = art.colors.histogram();

    println!("--- rgbs ---");
    println!("file            = {}", args.r#in);
    println!("file_bytes      = {}", art.file_len);
    println!("payload_bytes   = {}", art.payload_len);
    println!("compressed      = {}", art.compressed);
    println!("colors          = {}", n);
    println!("self_clocking   = {}", art.colors.is_self_clocking());
    println!("ends_dark       = {}", art.colors.last() == Some(&ColorState::Dark));
    println!("end_marks       = {}", h[codec.end_mark().index()]);
    println!("alt_marks       = {}", h[p.alt_mark.index()]);

    println!("--- profile ---");
    println!("profile_id      = {}", art.profile_id);
    println!("version         = {}", p.version);
    println!("ring            = {}", p.ring.map(|c| c.short().to_string()).join(" "));
    println!("offsets         = {:?}", p.offsets);
    println!("end_mark        = {}", p.end_mark);
    println!("alt_mark        = {}", p.alt_mark);
    println!("max_idle        = {}", p.max_idle);
    println!("strict          = {}", p.strict);

    println!("--- histogram ---");
    for c in ColorState::ALL {
        let count = h[c.index()];
        let pct = if n == 0 { 0.0 } else { (count as f64) * 100.0 / (n as f64) };
        println!("{:<8} {} count={} ({:.3}%)", c.name(), c.marked(), count, pct);
    }
    Ok(())
}
