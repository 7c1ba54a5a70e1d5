use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use valcount_networks::{load_endpoints, networks, validate, EndpointSpec};

use crate::fetcher::{RetryPolicy, DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_DELAY};
use crate::render::OutputFormat;
use crate::run::Opts;

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// On-disk config file. Every field is optional; CLI flags win over it.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct Config {
    pub endpoints: Option<Vec<EndpointSpec>>,
    pub endpoints_path: Option<PathBuf>,
    pub attempts: Option<u32>,
    pub retry_delay_secs: Option<u64>,
    pub request_timeout_secs: Option<u64>,
    pub log_level: Option<String>,
    pub output: Option<OutputFormat>,
}

impl Config {
    pub fn from_filepath(path: &Path) -> Result<Config> {
        let file = fs::File::open(path)
            .with_context(|| format!("Failed to open config file {}", path.display()))?;
        let mut config: Config = serde_json::from_reader(file)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        let config_dir = path.parent().unwrap_or_else(|| Path::new("."));

        if let Some(endpoints_path) = config.endpoints_path {
            config.endpoints_path = Some(to_absolute_path(config_dir, &endpoints_path)?);
        }

        Ok(config)
    }
}

pub fn to_absolute_path(base_dir: &Path, relative_path: &Path) -> Result<PathBuf> {
    if relative_path.is_absolute() {
        return Ok(relative_path.to_path_buf());
    }
    let base_dir = if base_dir.as_os_str().is_empty() {
        Path::new(".")
    } else {
        base_dir
    };
    Ok(base_dir.canonicalize()?.join(relative_path))
}

/// Fully resolved run settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub endpoints: Vec<EndpointSpec>,
    pub retry: RetryPolicy,
    pub request_timeout: Duration,
    pub log_level: Option<String>,
    pub output: OutputFormat,
}

impl Settings {
    /// Resolve settings from CLI options, the optional config file, and the
    /// compiled-in defaults, in that order of precedence.
    pub fn resolve(opts: &Opts) -> Result<Settings> {
        let config = match &opts.config {
            Some(path) => Config::from_filepath(path)?,
            None => Config::default(),
        };
        Self::from_layers(opts, config)
    }

    pub fn from_layers(opts: &Opts, config: Config) -> Result<Settings> {
        let endpoints = if let Some(path) = &opts.endpoints {
            load_endpoints(path)
                .with_context(|| format!("Failed to load endpoints from {}", path.display()))?
        } else {
            match (config.endpoints, config.endpoints_path) {
                (Some(_), Some(_)) => {
                    bail!("Config file sets both 'endpoints' and 'endpoints_path'")
                }
                (Some(endpoints), None) => {
                    validate(&endpoints).context("Invalid 'endpoints' in config file")?;
                    endpoints
                }
                (None, Some(path)) => load_endpoints(&path)
                    .with_context(|| format!("Failed to load endpoints from {}", path.display()))?,
                (None, None) => networks::all(),
            }
        };

        let attempts = opts
            .attempts
            .or(config.attempts)
            .unwrap_or(DEFAULT_MAX_ATTEMPTS);
        if attempts == 0 {
            bail!("attempts must be at least 1");
        }

        let delay = opts
            .retry_delay
            .or(config.retry_delay_secs)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_RETRY_DELAY);

        let request_timeout = opts
            .timeout
            .or(config.request_timeout_secs)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT);

        Ok(Settings {
            endpoints,
            retry: RetryPolicy::new(attempts, delay),
            request_timeout,
            log_level: opts.log_level.clone().or(config.log_level),
            output: opts.output.or(config.output).unwrap_or_default(),
        })
    }
}
