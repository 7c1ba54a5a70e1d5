//! valcount RPC - vote-account queries against cluster JSON-RPC endpoints
//!
//! Provides the wire types for `getVoteAccounts`, a reqwest-backed client,
//! and the [`VoteAccountSource`] seam the census fetcher is written against.

pub mod types;
pub mod client;
pub mod error;

pub use types::*;
pub use client::{RpcClient, RpcClientConfig, VoteAccountSource};
pub use error::RpcError;

/// JSON-RPC method queried for validator state
pub const GET_VOTE_ACCOUNTS: &str = "getVoteAccounts";

/// Commitment level requested for vote-account queries
pub const DEFAULT_COMMITMENT: &str = "finalized";
