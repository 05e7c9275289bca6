mod config;
mod status;
mod submit;
mod tracker;

pub use config::{FlowConfig, FlowKind, RetryPolicy, TokenSelector};
pub use status::UoStatus;
pub use submit::{build_request, TransferIntent};
pub use tracker::{LifecycleTracker, TransactionResult};
