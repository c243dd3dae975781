// crates/rgbsc-cli/src/logging.rs

use clap::ValueEnum;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

/// Per-target override, e.g. `RGBSC_LOG=rgbsc_core=debug,warn`.
pub const LOG_ENV: &str = "RGBSC_LOG";

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_filter(self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// `--log-level` applies to our own crates only; everything else stays at warn.
/// A valid `RGBSC_LOG` replaces the whole filter.
pub fn build_filter(level: LogLevel, env: Option<&str>) -> Targets {
    if let Some(spec) = env.map(str::trim).filter(|s| !s.is_empty()) {
        match spec.parse::<Targets>() {
            Ok(t) => return t,
            Err(e) => eprintln!("ignoring {LOG_ENV}={spec:?}: {e}"),
        }
    }
    Targets::new()
        .with_default(LevelFilter::WARN.min(level.as_filter()))
        .with_target("rgbsc_core", level.as_filter())
        .with_target("rgbsc_cli", level.as_filter())
}

/// Logs go to stderr; stdout stays clean for tables and decoded output.
pub fn init_logging(format: LogFormat, level: LogLevel) {
    let env = std::env::var(LOG_ENV).ok();
    let filter = build_filter(level, env.as_deref());
    let verbose = matches!(level, LogLevel::Debug | LogLevel::Trace);

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(verbose);

    let _ = match format {
        LogFormat::Text => tracing_subscriber::registry()
            .with(layer.with_filter(filter))
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(layer.json().with_filter(filter))
            .try_init(),
    };
}
