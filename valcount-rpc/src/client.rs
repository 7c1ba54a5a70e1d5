//! RPC client for querying vote accounts

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::error::RpcError;
use crate::types::*;

/// Anything that can return the vote-account state of an endpoint.
///
/// The census fetcher only talks to this trait, so tests can substitute a
/// scripted source for the network.
#[async_trait]
pub trait VoteAccountSource: Send + Sync {
    async fn get_vote_accounts(&self, url: &str) -> Result<VoteAccounts, RpcError>;
}

/// RPC Client configuration
#[derive(Debug, Clone)]
pub struct RpcClientConfig {
    pub timeout: Duration,
    pub commitment: String,
}

impl Default for RpcClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            commitment: crate::DEFAULT_COMMITMENT.to_string(),
        }
    }
}

/// HTTP JSON-RPC client, shared across endpoints
pub struct RpcClient {
    config: RpcClientConfig,
    client: Client,
    request_id: AtomicU64,
}

impl RpcClient {
    pub fn new(config: RpcClientConfig) -> Result<Self, RpcError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            config,
            client,
            request_id: AtomicU64::new(1),
        })
    }

    /// Send a request and decode its result
    async fn request<T: DeserializeOwned>(
        &self,
        url: &str,
        method: &str,
        params: Value,
    ) -> Result<T, RpcError> {
        let id = self.request_id.fetch_add(1, Ordering::SeqCst);
        let request = RpcRequest::new(id, method, params);

        debug!("POST {} {} (id {})", url, method, id);
        let response = self.client.post(url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RpcError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let response: RpcResponse<T> = serde_json::from_str(&body)?;
        response.into_result()
    }
}

#[async_trait]
impl VoteAccountSource for RpcClient {
    async fn get_vote_accounts(&self, url: &str) -> Result<VoteAccounts, RpcError> {
        self.request(
            url,
            crate::GET_VOTE_ACCOUNTS,
            json!([{ "commitment": self.config.commitment }]),
        )
        .await
    }
}
