use ethers::types::Address;

use super::{BalanceAsset, BalanceUpdate};
use crate::helpers::format_balance;

/// Read-through cache of the two balances a flow page shows: the native token
/// and the staking token. Folds subscription updates in; no retry or error
/// recovery of its own.
#[derive(Debug, Clone)]
pub struct BalanceView {
    staking_token: Address,
    native: Option<f64>,
    staked: Option<f64>,
}

impl BalanceView {
    pub fn new(staking_token: Address) -> Self {
        Self {
            staking_token,
            native: None,
            staked: None,
        }
    }

    pub fn apply(&mut self, update: &BalanceUpdate) {
        match update.asset {
            BalanceAsset::Native => self.native = Some(update.amount),
            BalanceAsset::Token(token) if token == self.staking_token => {
                self.staked = Some(update.amount)
            }
            // updates for untracked tokens are dropped
            BalanceAsset::Token(_) => {}
        }
    }

    /// Numeric balance backing the stake flow's availability guard
    pub fn available_native(&self) -> f64 {
        self.native.unwrap_or(0.0)
    }

    pub fn native_display(&self) -> String {
        format_balance(self.available_native())
    }

    pub fn staked_display(&self) -> String {
        format_balance(self.staked.unwrap_or(0.0))
    }
}
