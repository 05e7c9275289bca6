use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;

use ethers::types::Address;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_COOLDOWN_MILLIS;
use crate::helpers::Network;
use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenSelector {
    Eth,
    Steth,
}

lazy_static! {
    static ref TOKEN_SELECTORS: HashMap<&'static str, TokenSelector> = {
        let mut selectors = HashMap::new();
        selectors.insert("ETH", TokenSelector::Eth);
        selectors.insert("stETH", TokenSelector::Steth);
        selectors
    };
}

impl FromStr for TokenSelector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        TOKEN_SELECTORS
            .get(s)
            .copied()
            .ok_or_else(|| Error::UnknownToken(s.to_string()))
    }
}

/// Which request shape a flow builds: a stake deposits native value into the
/// staking contract, a withdraw sends to an arbitrary recipient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FlowKind {
    Stake,
    Withdraw,
}

/// What to do when the bundler cannot confirm a submitted operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RetryPolicy {
    /// Surface the failed wait directly
    None,
    /// Ask the provider to drop and replace the operation once, then await
    /// the replacement
    ReplaceOnce,
}

#[derive(Debug, Clone)]
pub struct FlowConfig {
    pub network: Network,
    /// Staking token contract: the stake target and the ERC-20 transfer target
    pub staking_contract: Address,
    /// How long a terminal status stays visible before the flow re-arms
    pub cooldown: Duration,
    pub retry: RetryPolicy,
}

impl FlowConfig {
    /// Stake preset: one drop-and-replace before giving up
    pub fn stake(network: Network) -> Self {
        Self::with_policy(network, RetryPolicy::ReplaceOnce)
    }

    /// Withdraw preset: no automatic retry
    pub fn withdraw(network: Network) -> Self {
        Self::with_policy(network, RetryPolicy::None)
    }

    fn with_policy(network: Network, retry: RetryPolicy) -> Self {
        Self {
            network,
            staking_contract: network.steth_address(),
            cooldown: Duration::from_millis(DEFAULT_COOLDOWN_MILLIS),
            retry,
        }
    }

    pub fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = cooldown;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_staking_contract(mut self, contract: Address) -> Self {
        self.staking_contract = contract;
        self
    }
}
