//! Common test utilities: a scripted vote-account source

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};
use valcount_rpc::{RpcError, VoteAccounts, VoteAccountSource};

/// How a scripted endpoint answers
#[derive(Clone)]
pub enum Script {
    /// Always answers with these accounts
    Ok(VoteAccounts),
    /// Always fails at the transport
    Fail,
    /// Fails this many times, then answers
    FailThen(usize, VoteAccounts),
}

/// In-memory source keyed by URL that records every call
#[derive(Default)]
pub struct ScriptedSource {
    scripts: HashMap<String, Script>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: &str, script: Script) -> Self {
        self.scripts.insert(url.to_string(), script);
        self
    }

    pub fn calls_to(&self, url: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|u| *u == url).count()
    }

    pub fn call_log(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl VoteAccountSource for ScriptedSource {
    async fn get_vote_accounts(&self, url: &str) -> Result<VoteAccounts, RpcError> {
        let call_no = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(url.to_string());
            calls.iter().filter(|u| *u == url).count()
        };

        match self.scripts.get(url) {
            None => Err(RpcError::Http(format!("connection refused: {}", url))),
            Some(Script::Ok(accounts)) => Ok(accounts.clone()),
            Some(Script::Fail) => Err(RpcError::Timeout),
            Some(Script::FailThen(failures, accounts)) => {
                if call_no <= *failures {
                    Err(RpcError::Status(503))
                } else {
                    Ok(accounts.clone())
                }
            }
        }
    }
}

/// Build vote accounts from explicit stake values for the current set
pub fn accounts_with_stakes(stakes: &[Value], delinquent: usize) -> VoteAccounts {
    let current: Vec<Value> = stakes
        .iter()
        .enumerate()
        .map(|(i, stake)| json!({ "activatedStake": stake, "votePubkey": format!("vote_{}", i) }))
        .collect();
    let delinquent: Vec<Value> = (0..delinquent)
        .map(|i| json!({ "activatedStake": 1000, "votePubkey": format!("late_{}", i) }))
        .collect();
    serde_json::from_value(json!({ "current": current, "delinquent": delinquent })).unwrap()
}

/// `active` staked validators, `unstaked` zero-stake ones, and `delinquent` delinquent ones
pub fn accounts(active: usize, unstaked: usize, delinquent: usize) -> VoteAccounts {
    let mut stakes = vec![json!(5_000_000_000u64); active];
    stakes.extend(vec![json!(0); unstaked]);
    accounts_with_stakes(&stakes, delinquent)
}
