use ethers::types::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

use crate::consts::ERC20_TRANSFER_SELECTOR;

/// A transfer request handed to the smart account for submission as a user
/// operation. Built fresh per attempt and never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserOperationRequest {
    pub target: Address,
    pub data: Bytes,
    pub value: U256,
}

impl UserOperationRequest {
    /// Plain value transfer: empty call data, amount carried as native value
    pub fn native_transfer(target: Address, value: U256) -> Self {
        Self {
            target,
            data: Bytes::default(),
            value,
        }
    }

    /// ERC-20 transfer: call data targets the token contract, zero value
    pub fn erc20_transfer(token: Address, recipient: Address, amount: U256) -> Self {
        Self {
            target: token,
            data: encode_transfer_call(recipient, amount),
            value: U256::zero(),
        }
    }
}

/// Encode transfer(address,uint256) call data: 4-byte selector followed by
/// two 32-byte words
pub fn encode_transfer_call(recipient: Address, amount: U256) -> Bytes {
    let mut data = Vec::with_capacity(4 + 32 + 32);
    data.extend_from_slice(&ERC20_TRANSFER_SELECTOR);

    let mut recipient_word = [0u8; 32];
    recipient_word[12..].copy_from_slice(recipient.as_bytes());
    data.extend_from_slice(&recipient_word);

    let mut amount_word = [0u8; 32];
    amount.to_big_endian(&mut amount_word);
    data.extend_from_slice(&amount_word);

    Bytes::from(data)
}
