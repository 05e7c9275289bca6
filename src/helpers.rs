use ethers::types::{Address, H256, U256};
use ethers::utils::parse_units;
use serde::{Deserialize, Serialize};

use crate::consts::{
    DISPLAY_DECIMALS, EXPLORER_MAINNET, EXPLORER_SEPOLIA, STETH_MAINNET, STETH_SEPOLIA,
};
use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Network {
    Mainnet,
    Sepolia,
}

impl Network {
    /// stETH token contract on this network
    pub fn steth_address(&self) -> Address {
        match self {
            Network::Mainnet => STETH_MAINNET.parse().unwrap(),
            Network::Sepolia => STETH_SEPOLIA.parse().unwrap(),
        }
    }

    pub fn explorer_url(&self) -> &'static str {
        match self {
            Network::Mainnet => EXPLORER_MAINNET,
            Network::Sepolia => EXPLORER_SEPOLIA,
        }
    }

    /// Display-only link to a confirmed transaction
    pub fn tx_url(&self, transaction_hash: H256) -> String {
        format!("{}/tx/{:#x}", self.explorer_url(), transaction_hash)
    }
}

/// Parse a user-entered decimal amount into the token's smallest unit.
///
/// Rejects empty input and anything that is not a finite non-negative number
/// before scaling, so callers can rely on the error rather than a wrapped
/// negative value.
pub fn parse_amount(raw: &str, decimals: u32) -> Result<U256> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidAmount("empty amount".to_string()));
    }
    let numeric: f64 = trimmed
        .parse()
        .map_err(|_| Error::InvalidAmount(format!("\"{trimmed}\" is not a number")))?;
    if !numeric.is_finite() || numeric < 0.0 {
        return Err(Error::InvalidAmount(format!(
            "\"{trimmed}\" is not a finite non-negative number"
        )));
    }
    let scaled = parse_units(trimmed, decimals).map_err(|e| Error::InvalidAmount(e.to_string()))?;
    Ok(scaled.into())
}

/// Format a balance for display at the fixed precision
pub fn format_balance(amount: f64) -> String {
    format!("{:.prec$}", amount, prec = DISPLAY_DECIMALS)
}

/// Shorten an address (or placeholder text) for button-width display
pub fn abbreviate_address(content: &str) -> String {
    if content.len() <= 10 {
        return content.to_string();
    }
    format!(
        "{}...{}",
        &content[..5],
        &content[content.len() - 5..]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_amount_scales_to_smallest_unit() {
        assert_eq!(
            parse_amount("1", 18).unwrap(),
            U256::exp10(18),
        );
        assert_eq!(
            parse_amount("0.5", 18).unwrap(),
            U256::exp10(17) * U256::from(5),
        );
        assert_eq!(parse_amount("0", 18).unwrap(), U256::zero());
        assert_eq!(parse_amount("10", 18).unwrap(), U256::exp10(18) * U256::from(10));
    }

    #[test]
    fn parse_amount_rejects_bad_input() {
        assert!(parse_amount("", 18).is_err());
        assert!(parse_amount("   ", 18).is_err());
        assert!(parse_amount("abc", 18).is_err());
        assert!(parse_amount("-1", 18).is_err());
        assert!(parse_amount("NaN", 18).is_err());
        assert!(parse_amount("inf", 18).is_err());
    }

    #[test]
    fn tx_url_uses_explorer_template() {
        let hash = H256::from_low_u64_be(0xabc00);
        let url = Network::Sepolia.tx_url(hash);
        assert!(url.starts_with("https://sepolia.etherscan.io/tx/0x"));
        assert!(url.ends_with("abc00"));
    }

    #[test]
    fn steth_addresses_parse() {
        assert_ne!(
            Network::Mainnet.steth_address(),
            Network::Sepolia.steth_address()
        );
    }

    #[test]
    fn format_balance_is_three_decimals() {
        assert_eq!(format_balance(0.0), "0.000");
        assert_eq!(format_balance(2.0), "2.000");
        assert_eq!(format_balance(1.23456), "1.235");
    }

    #[test]
    fn abbreviate_keeps_short_content() {
        assert_eq!(abbreviate_address("Loading..."), "Loading...");
        assert_eq!(
            abbreviate_address("0xbf52359044670050842df67da8183d7d278477f5"),
            "0xbf5...477f5"
        );
    }
}
