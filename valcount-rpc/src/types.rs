//! JSON-RPC wire types for `getVoteAccounts`

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RpcError;

/// JSON-RPC 2.0 request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub id: u64,
    pub method: String,
    pub params: Value,
}

impl RpcRequest {
    pub fn new(id: u64, method: &str, params: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            method: method.to_string(),
            params,
        }
    }
}

/// JSON-RPC 2.0 response
#[derive(Debug, Clone, Deserialize)]
pub struct RpcResponse<T> {
    #[serde(default)]
    pub jsonrpc: Option<String>,
    #[serde(default)]
    pub id: Option<Value>,
    pub result: Option<T>,
    pub error: Option<RpcErrorObject>,
}

impl<T> RpcResponse<T> {
    /// Collapse the response into its result, surfacing an error object first
    pub fn into_result(self) -> Result<T, RpcError> {
        if let Some(error) = self.error {
            return Err(RpcError::Rpc {
                code: error.code,
                message: error.message,
            });
        }
        self.result.ok_or(RpcError::MissingResult)
    }
}

/// JSON-RPC error object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Result of `getVoteAccounts`
#[derive(Debug, Clone, Deserialize)]
pub struct VoteAccounts {
    pub current: Vec<VoteAccount>,
    /// Only the number of entries matters, so their shape is not checked.
    pub delinquent: Vec<Value>,
}

/// A current vote account
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteAccount {
    /// Lamports as a JSON number; some gateways send a numeric string.
    #[serde(alias = "activated_stake")]
    pub activated_stake: Value,
    #[serde(default)]
    pub vote_pubkey: Option<String>,
    #[serde(default)]
    pub node_pubkey: Option<String>,
    #[serde(default)]
    pub commission: Option<u8>,
    #[serde(default)]
    pub last_vote: Option<u64>,
    #[serde(default)]
    pub root_slot: Option<u64>,
    #[serde(default)]
    pub epoch_vote_account: Option<bool>,
}

/// Active and inactive validator counts for one cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorCounts {
    pub active: u64,
    pub inactive: u64,
}

impl ValidatorCounts {
    pub fn total(&self) -> u64 {
        self.active + self.inactive
    }
}

/// Parse an activated stake value into a number.
///
/// Accepts a JSON number or a string holding one. Anything else is an error
/// so a bad entry fails the whole query rather than being skipped.
pub fn parse_stake(index: usize, value: &Value) -> Result<f64, RpcError> {
    let invalid = || RpcError::InvalidStake {
        index,
        value: value.to_string(),
    };
    match value {
        Value::Number(n) => n.as_f64().ok_or_else(invalid),
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}

impl VoteAccounts {
    /// Current validators with stake strictly above zero
    pub fn active_count(&self) -> Result<u64, RpcError> {
        let mut active = 0;
        for (index, account) in self.current.iter().enumerate() {
            if parse_stake(index, &account.activated_stake)? > 0.0 {
                active += 1;
            }
        }
        Ok(active)
    }

    /// Delinquent validators, counted regardless of stake
    pub fn inactive_count(&self) -> u64 {
        self.delinquent.len() as u64
    }

    pub fn counts(&self) -> Result<ValidatorCounts, RpcError> {
        Ok(ValidatorCounts {
            active: self.active_count()?,
            inactive: self.inactive_count(),
        })
    }
}
