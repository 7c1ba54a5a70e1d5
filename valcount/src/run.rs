use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use valcount_rpc::{RpcClient, RpcClientConfig};

use crate::config::Settings;
use crate::logging;
use crate::render::{print_report, OutputFormat};
use crate::report::build_report;

#[derive(Parser, Debug, Default)]
#[command(name = "valcount")]
#[command(about = "Count active and delinquent validators across cluster RPC endpoints", long_about = None)]
pub struct Opts {
    /// JSON config file
    #[arg(long, env = "VALCOUNT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Ordered endpoint list (JSON array of {"name", "url"}) replacing the built-in networks
    #[arg(long, env = "VALCOUNT_ENDPOINTS")]
    pub endpoints: Option<PathBuf>,

    /// Attempts per endpoint, including the first [default: 3]
    #[arg(long, env = "VALCOUNT_ATTEMPTS", value_parser = clap::value_parser!(u32).range(1..))]
    pub attempts: Option<u32>,

    /// Seconds to wait between attempts [default: 2]
    #[arg(long, env = "VALCOUNT_RETRY_DELAY")]
    pub retry_delay: Option<u64>,

    /// HTTP request timeout in seconds [default: 10]
    #[arg(long, env = "VALCOUNT_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, env = "VALCOUNT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Report format
    #[arg(long, value_enum, env = "VALCOUNT_OUTPUT")]
    pub output: Option<OutputFormat>,
}

pub async fn run(opts: &Opts) -> Result<()> {
    let settings = Settings::resolve(opts)?;
    logging::init_logging(settings.log_level.as_deref())?;

    log::info!(
        "Querying {} endpoint(s), {} attempt(s) each, {}s between attempts",
        settings.endpoints.len(),
        settings.retry.max_attempts,
        settings.retry.delay.as_secs()
    );

    let client = RpcClient::new(RpcClientConfig {
        timeout: settings.request_timeout,
        ..Default::default()
    })
    .context("Failed to build RPC client")?;

    let rows = build_report(&client, &settings.endpoints, &settings.retry).await;

    let failed = rows.iter().filter(|row| row.is_error()).count();
    if failed > 0 {
        log::warn!("{} of {} endpoint(s) could not be queried", failed, rows.len());
    }

    print_report(settings.output, &rows).context("Failed to render report")?;
    Ok(())
}
