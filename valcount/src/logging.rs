use anyhow::{Context, Result};
use log::LevelFilter;

/// Used when neither a flag, the config file, nor `RUST_LOG` sets a level
pub const DEFAULT_LOG_LEVEL: &str = "warn";

pub fn parse_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" | "warning" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Warn,
    }
}

/// Initialize stderr logging.
///
/// An explicit `log_level` overrides `RUST_LOG`; otherwise `RUST_LOG` applies
/// and falls back to [`DEFAULT_LOG_LEVEL`].
pub fn init_logging(log_level: Option<&str>) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_LEVEL));
    builder.target(env_logger::Target::Stderr);

    if let Some(level) = log_level {
        builder.filter_level(parse_level(level));
    }

    builder.try_init().context("Failed to initialize logging")?;
    log::debug!(
        "Logging initialized (level: {})",
        log_level.unwrap_or(DEFAULT_LOG_LEVEL)
    );
    Ok(())
}
