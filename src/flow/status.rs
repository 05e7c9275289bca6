use std::fmt;

use serde::{Deserialize, Serialize};

/// Status of the single in-flight user operation a flow instance may hold.
///
/// Display text is a pure function of the status; flows render their submit
/// control directly from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UoStatus {
    Idle,
    Requesting,
    Bundling,
    Retrying,
    Received,
    ErrorBundling,
}

impl UoStatus {
    pub fn is_idle(&self) -> bool {
        matches!(self, UoStatus::Idle)
    }

    /// Terminal for the attempt; the flow auto-resets to idle afterwards
    pub fn is_terminal(&self) -> bool {
        matches!(self, UoStatus::Received | UoStatus::ErrorBundling)
    }
}

impl fmt::Display for UoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            UoStatus::Idle => "Send",
            UoStatus::Requesting => "Requesting",
            UoStatus::Bundling => "Bundling",
            UoStatus::Retrying => "Retrying",
            UoStatus::Received => "Received",
            UoStatus::ErrorBundling => "Error Bundling",
        };
        f.write_str(text)
    }
}
