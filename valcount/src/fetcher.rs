use std::time::Duration;

use log::{debug, error, warn};
use tokio::time::sleep;
use valcount_networks::EndpointSpec;
use valcount_rpc::{RpcError, ValidatorCounts, VoteAccountSource};

pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(2);

/// Fixed-delay retry policy: no backoff, no jitter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first. Never below 1.
    pub max_attempts: u32,
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_DELAY)
    }
}

/// Outcome of fetching one endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult {
    Counts(ValidatorCounts),
    Failure { reason: String },
}

impl FetchResult {
    pub fn is_failure(&self) -> bool {
        matches!(self, FetchResult::Failure { .. })
    }
}

/// One query: transport call plus counting. Both failure kinds end the attempt.
async fn attempt<S>(source: &S, endpoint: &EndpointSpec) -> Result<ValidatorCounts, RpcError>
where
    S: VoteAccountSource + ?Sized,
{
    let accounts = source.get_vote_accounts(&endpoint.url).await?;
    accounts.counts()
}

/// Fetch validator counts for `endpoint`, retrying on any failure.
///
/// Waits `policy.delay` between attempts. Once every attempt has failed the
/// exhaustion is logged and a [`FetchResult::Failure`] is returned; this
/// function never returns an error to its caller.
pub async fn fetch<S>(source: &S, endpoint: &EndpointSpec, policy: &RetryPolicy) -> FetchResult
where
    S: VoteAccountSource + ?Sized,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt_no = 1;

    loop {
        match attempt(source, endpoint).await {
            Ok(counts) => {
                debug!(
                    "{}: {} active, {} inactive (attempt {}/{})",
                    endpoint.name, counts.active, counts.inactive, attempt_no, max_attempts
                );
                return FetchResult::Counts(counts);
            }
            Err(e) => {
                warn!(
                    "{}: attempt {}/{} failed: {}",
                    endpoint.name, attempt_no, max_attempts, e
                );
                if attempt_no >= max_attempts {
                    error!(
                        "Failed to fetch data from {} after {} attempts.",
                        endpoint.url, max_attempts
                    );
                    return FetchResult::Failure {
                        reason: e.to_string(),
                    };
                }
                attempt_no += 1;
                sleep(policy.delay).await;
            }
        }
    }
}
