//! SDK for a staking product built on a smart-contract
//! (account-abstraction) wallet.
//!
//! The crate owns the user-operation lifecycle: translating user input into
//! transfer requests, driving submit → bundle → confirm with an optional
//! drop-and-replace retry, and surfacing terminal outcomes. Address
//! derivation, balance reads, bundling, and confirmation waiting are
//! delegated to injected collaborators ([`SmartAccountProvider`],
//! [`BalanceProvider`], [`Notifier`]).

mod account;
mod balances;
mod consts;
mod errors;
mod flow;
mod helpers;
mod notify;
pub mod prelude;

pub use account::{
    encode_transfer_call, ReceiveAddress, SmartAccountProvider, UserOperationHandle,
    UserOperationRequest, INITIALIZING_PROMPT, SIGNED_OUT_PROMPT,
};
pub use balances::{BalanceAsset, BalanceProvider, BalanceStream, BalanceUpdate, BalanceView};
pub use consts::*;
pub use errors::Error;
pub use flow::{
    build_request, FlowConfig, FlowKind, LifecycleTracker, RetryPolicy, TokenSelector,
    TransactionResult, TransferIntent, UoStatus,
};
pub use helpers::{abbreviate_address, format_balance, parse_amount, Network};
pub use notify::{LogNotifier, Notification, Notifier, Severity};
