use ethers::types::Address;
use serde::{Deserialize, Serialize};

use super::config::{FlowConfig, FlowKind, TokenSelector};
use crate::account::UserOperationRequest;
use crate::consts::TOKEN_DECIMALS;
use crate::helpers::{format_balance, parse_amount};
use crate::prelude::*;

/// Raw user input for one submission attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferIntent {
    pub token: TokenSelector,
    pub recipient: Option<String>,
    pub amount: String,
    /// Balance the amount is checked against, when the flow shows one
    pub available: Option<f64>,
}

impl TransferIntent {
    pub fn stake(amount: impl Into<String>, available: f64) -> Self {
        Self {
            token: TokenSelector::Eth,
            recipient: None,
            amount: amount.into(),
            available: Some(available),
        }
    }

    pub fn withdraw(
        token: TokenSelector,
        recipient: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            token,
            recipient: Some(recipient.into()),
            amount: amount.into(),
            available: None,
        }
    }
}

/// Translate user input into the request handed to the smart account.
///
/// Pure: validates and encodes, mutates no lifecycle state. Errors here mean
/// nothing was sent.
pub fn build_request(
    kind: FlowKind,
    config: &FlowConfig,
    intent: &TransferIntent,
) -> Result<UserOperationRequest> {
    let trimmed = intent.amount.trim();
    let value = parse_amount(trimmed, TOKEN_DECIMALS)?;

    if let Some(available) = intent.available {
        // same comparison the form guard makes before enabling submit
        let requested: f64 = trimmed
            .parse()
            .map_err(|_| Error::InvalidAmount(trimmed.to_string()))?;
        if requested > available {
            return Err(Error::InsufficientBalance {
                requested: trimmed.to_string(),
                available: format_balance(available),
            });
        }
    }

    match kind {
        FlowKind::Stake => Ok(UserOperationRequest::native_transfer(
            config.staking_contract,
            value,
        )),
        FlowKind::Withdraw => {
            let recipient = parse_recipient(intent.recipient.as_deref())?;
            match intent.token {
                TokenSelector::Eth => Ok(UserOperationRequest::native_transfer(recipient, value)),
                TokenSelector::Steth => Ok(UserOperationRequest::erc20_transfer(
                    config.staking_contract,
                    recipient,
                    value,
                )),
            }
        }
    }
}

fn parse_recipient(recipient: Option<&str>) -> Result<Address> {
    let raw = recipient.ok_or_else(|| Error::InvalidRecipient("missing recipient".to_string()))?;
    let trimmed = raw.trim();
    if trimmed.len() != 42 {
        return Err(Error::InvalidRecipient(format!(
            "expected 42 characters, got {}",
            trimmed.len()
        )));
    }
    trimmed
        .parse()
        .map_err(|_| Error::InvalidRecipient(format!("\"{trimmed}\" is not hex-address-shaped")))
}
