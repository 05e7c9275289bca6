mod view;

pub use view::BalanceView;

use chrono::{DateTime, Utc};
use ethers::types::Address;
use futures_util::stream::BoxStream;
use serde::{Deserialize, Serialize};

use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BalanceAsset {
    Native,
    Token(Address),
}

/// One observation from the live balance subscription
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceUpdate {
    pub asset: BalanceAsset,
    pub amount: f64,
    pub at: DateTime<Utc>,
}

pub type BalanceStream = BoxStream<'static, BalanceUpdate>;

/// The balance-reader collaborator: a live numeric stream per (address, asset).
///
/// Refresh cadence is owned by the implementation and is fully decoupled from
/// the operation lifecycle.
pub trait BalanceProvider: Send + Sync {
    fn subscribe_balance(&self, address: Address, asset: BalanceAsset) -> Result<BalanceStream>;
}
