mod provider;
mod receive;
mod request;

pub use provider::{SmartAccountProvider, UserOperationHandle};
pub use receive::{ReceiveAddress, INITIALIZING_PROMPT, SIGNED_OUT_PROMPT};
pub use request::{encode_transfer_call, UserOperationRequest};
