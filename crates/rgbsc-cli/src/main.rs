// crates/rgbsc-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;
mod logging;

use logging::{LogFormat, LogLevel};

#[derive(Parser)]
#[command(name = "rgbsc-cli")]
#[command(about = "Self-clocking RGB transition codec CLI", long_about = None)]
pub struct Cli {
    /// Log verbosity (stderr)
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode a file into a color sequence (.rgbs or text)
    Encode(cmd::encode::EncodeArgs),

    /// Decode a color sequence back to bytes
    Decode(cmd::decode::DecodeArgs),

    /// Inspect a .rgbs artifact (header, profile id, color histogram)
    Inspect(cmd::inspect::InspectArgs),

    /// Print the symbol x previous-color transition table and check it
    Table(cmd::table::TableArgs),

    /// Pretty-print the color chain for a string
    Show(cmd::show::ShowArgs),

    /// Oversample an encoded string like a slow camera would, then decode it
    Sim(cmd::sim::SimArgs),

    /// Codec profile tools (.rgbp)
    Profile(cmd::profile::ProfileArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_format, cli.log_level);

    match cli.cmd {
        Commands::Encode(args) => cmd::encode::run(args),
        Commands::Decode(args) => cmd::decode::run(args),
        Commands::Inspect(args) => cmd::inspect::run(args),
        Commands::Table(args) => cmd::table::run(args),
        Commands::Show(args) => cmd::show::run(args),
        Commands::Sim(args) => cmd::sim::run(args),
        Commands::Profile(args) => cmd::profile::run(args),
    }
}
