use async_trait::async_trait;
use ethers::types::{Address, H256};

use crate::account::request::UserOperationRequest;
use crate::prelude::*;

/// Identifier for one in-flight user operation, returned by submission.
///
/// Carries an echo of the submitted request because a drop-and-replace must
/// re-submit the same call with higher fees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserOperationHandle {
    pub op_hash: H256,
    pub request: UserOperationRequest,
}

/// The account/session collaborator: a smart-contract wallet client that can
/// submit user operations to a bundler and await their inclusion.
///
/// Waiting is fully delegated to the implementation; the lifecycle tracker
/// owns no polling loop of its own.
#[async_trait]
pub trait SmartAccountProvider: Send + Sync {
    /// Whether a user session exists at all
    fn is_signed_in(&self) -> bool;

    /// Whether the smart account client finished initializing
    fn is_ready(&self) -> bool;

    /// Address of the smart account
    async fn address(&self) -> Result<Address>;

    /// Submit a request as a user operation; returns the operation handle
    async fn send_user_operation(
        &self,
        request: UserOperationRequest,
    ) -> Result<UserOperationHandle>;

    /// Wait for the operation to be mined, yielding the transaction hash
    async fn wait_for_transaction(&self, handle: &UserOperationHandle) -> Result<H256>;

    /// Replace a stuck operation with a re-priced copy of the same request
    async fn drop_and_replace(&self, handle: &UserOperationHandle)
        -> Result<UserOperationHandle>;
}
