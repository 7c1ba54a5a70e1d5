use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A named RPC endpoint representing one cluster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointSpec {
    /// Display name used as the report's network column (e.g., "Solana Devnet")
    pub name: String,

    /// JSON-RPC address of the cluster
    pub url: String,
}

impl EndpointSpec {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum NetworkConfigError {
    #[error("Failed to read endpoint list {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse endpoint list: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Endpoint #{index} has an empty {field}")]
    EmptyField { index: usize, field: &'static str },
}

/// Parse an ordered endpoint list from a JSON array of `{name, url}` objects.
///
/// Declaration order is kept as-is; duplicates are not collapsed.
pub fn parse_endpoints(json: &str) -> Result<Vec<EndpointSpec>, NetworkConfigError> {
    let endpoints: Vec<EndpointSpec> = serde_json::from_str(json)?;
    validate(&endpoints)?;
    Ok(endpoints)
}

/// Load an ordered endpoint list from a JSON file
pub fn load_endpoints(path: &Path) -> Result<Vec<EndpointSpec>, NetworkConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| NetworkConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_endpoints(&content)
}

pub fn validate(endpoints: &[EndpointSpec]) -> Result<(), NetworkConfigError> {
    for (index, endpoint) in endpoints.iter().enumerate() {
        if endpoint.name.trim().is_empty() {
            return Err(NetworkConfigError::EmptyField { index, field: "name" });
        }
        if endpoint.url.trim().is_empty() {
            return Err(NetworkConfigError::EmptyField { index, field: "url" });
        }
    }
    Ok(())
}

/// Compiled-in networks, in report order
pub mod networks {
    use super::EndpointSpec;

    /// Keys accepted by [`by_name`], in report order
    pub const KEYS: [&str; 4] = [
        "solana-devnet",
        "solana-testnet",
        "solana-mainnet",
        "x1-testnet",
    ];

    pub fn solana_devnet() -> EndpointSpec {
        serde_json::from_str(include_str!("../networks/solana-devnet/info.json"))
            .expect("Failed to parse solana-devnet info")
    }

    pub fn solana_testnet() -> EndpointSpec {
        serde_json::from_str(include_str!("../networks/solana-testnet/info.json"))
            .expect("Failed to parse solana-testnet info")
    }

    pub fn solana_mainnet() -> EndpointSpec {
        serde_json::from_str(include_str!("../networks/solana-mainnet/info.json"))
            .expect("Failed to parse solana-mainnet info")
    }

    pub fn x1_testnet() -> EndpointSpec {
        serde_json::from_str(include_str!("../networks/x1-testnet/info.json"))
            .expect("Failed to parse x1-testnet info")
    }

    /// Get all networks
    pub fn all() -> Vec<EndpointSpec> {
        vec![
            solana_devnet(),
            solana_testnet(),
            solana_mainnet(),
            x1_testnet(),
        ]
    }

    /// Get a network by key
    pub fn by_name(name: &str) -> Option<EndpointSpec> {
        match name {
            "solana-devnet" => Some(solana_devnet()),
            "solana-testnet" => Some(solana_testnet()),
            "solana-mainnet" => Some(solana_mainnet()),
            "x1-testnet" => Some(x1_testnet()),
            _ => None,
        }
    }
}
