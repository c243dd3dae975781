use clap::{Args, Subcommand, ValueEnum};
use rgbsc_core::profile::defaults::{standard_profile, DEFAULT_MAX_IDLE};
use rgbsc_core::profile::format::profile_id_hex;
use rgbsc_core::validate::validate_profile;
use rgbsc_core::ColorState;

use crate::io::profile_file;

#[derive(Args)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub cmd: ProfileCmd,
}

#[derive(Subcommand)]
pub enum ProfileCmd {
    /// Write a profile derived from the standard one
    Write(WriteArgs),
    /// Print a profile file and its id
    Show(ShowArgs),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum EndMark {
    White,
    Yellow,
}

#[derive(Args)]
pub struct WriteArgs {
    /// Output .rgbp path
    #[arg(long)]
    pub out: String,

    /// Mark emitted after each byte; the other one becomes the alternate mark
    #[arg(long, value_enum, default_value_t = EndMark::White)]
    pub end_mark: EndMark,

    /// Idle samples tolerated per byte
    #[arg(long, default_value_t = DEFAULT_MAX_IDLE)]
    pub max_idle: u32,

    /// Reject transitions the encoder cannot produce
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Input .rgbp path
    #[arg(long)]
    pub r#in: String,
}

pub fn run(args: ProfileArgs) -> anyhow::Result<()> {
    match args.cmd {
        ProfileCmd::Write(a) => write(a),
        ProfileCmd::Show(a) => show(a),
    }
}

fn write(args: WriteArgs) -> anyhow::Result<()> {
    let mut p = standard_profile();
    (p.end_mark, p.alt_mark) = match args.end_mark {
        EndMark::White => (ColorState::White, ColorState::Yellow),
        EndMark::Yellow => (ColorState::Yellow, ColorState::White),
    };
    p.max_idle = args.max_idle;
    p.strict = args.strict;
    validate_profile(&p)?;

    profile_file::save_rgbp(&args.out, &p)?;
    eprintln!("profile ok: out={} profile_id={}", args.out, profile_id_hex(&p));
    Ok(())
}

fn show(args: ShowArgs) -> anyhow::Result<()> {
    let p = profile_file::load_rgbp(&args.r#in)?;
    println!("profile_id = {}", profile_id_hex(&p));
    println!("version    = {}", p.version);
    println!("ring       = {}", p.ring.map(|c| c.name()).join(" "));
    for c in ColorState::ALL {
        println!("offset[{:<7}] = {}", c.name(), p.offsets[c.index()]);
    }
    println!("end_mark   = {}", p.end_mark);
    println!("alt_mark   = {}", p.alt_mark);
    println!("max_idle   = {}", p.max_idle);
    println!("strict     = {}", p.strict);
    Ok(())
}
