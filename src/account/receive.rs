use std::fmt;

use crate::account::provider::SmartAccountProvider;
use crate::helpers::abbreviate_address;
use crate::prelude::*;

pub const SIGNED_OUT_PROMPT: &str = "Log in to see your address";
pub const INITIALIZING_PROMPT: &str = "Loading...";

/// The deposit flow's receive address, resolved from session state.
///
/// Clipboard interaction stays in the UI; this owns only the content string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReceiveAddress {
    SignedOut,
    Initializing,
    Ready(String),
}

impl ReceiveAddress {
    pub async fn resolve<P: SmartAccountProvider>(provider: &P) -> Result<Self> {
        if !provider.is_signed_in() {
            return Ok(ReceiveAddress::SignedOut);
        }
        if !provider.is_ready() {
            return Ok(ReceiveAddress::Initializing);
        }
        let address = provider.address().await?;
        Ok(ReceiveAddress::Ready(format!("{address:#x}")))
    }

    pub fn content(&self) -> &str {
        match self {
            ReceiveAddress::SignedOut => SIGNED_OUT_PROMPT,
            ReceiveAddress::Initializing => INITIALIZING_PROMPT,
            ReceiveAddress::Ready(address) => address,
        }
    }

    /// Button-width form: anything longer than 10 characters is shortened
    pub fn abbreviated(&self) -> String {
        abbreviate_address(self.content())
    }
}

impl fmt::Display for ReceiveAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.content())
    }
}
