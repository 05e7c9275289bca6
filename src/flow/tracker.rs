use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use ethers::types::H256;
use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use uuid::Uuid;

use super::config::{FlowConfig, FlowKind, RetryPolicy};
use super::status::UoStatus;
use super::submit::{build_request, TransferIntent};
use crate::account::{SmartAccountProvider, UserOperationRequest};
use crate::notify::{Notification, Notifier};
use crate::prelude::*;

/// Outcome of a confirmed attempt, retained for display until the next
/// submission resets it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResult {
    pub transaction_hash: H256,
    /// 1 for a direct confirmation, 2 when the replacement confirmed
    pub attempts: u32,
    pub explorer_url: String,
    pub confirmed_at: DateTime<Utc>,
}

#[derive(Default)]
struct LastOutcome {
    result: Option<TransactionResult>,
    error: Option<String>,
}

/// Drives one flow's user operations through request → bundle → confirm,
/// including the drop-and-replace path and the post-terminal cooldown.
///
/// One tracker per flow instance; the idle guard admits a single attempt at
/// a time. Collaborators are injected, never looked up ambiently.
pub struct LifecycleTracker<P: SmartAccountProvider> {
    kind: FlowKind,
    config: FlowConfig,
    provider: Arc<P>,
    notifier: Arc<dyn Notifier>,
    status_tx: watch::Sender<UoStatus>,
    last: Mutex<LastOutcome>,
}

impl<P: SmartAccountProvider> LifecycleTracker<P> {
    pub fn new(
        kind: FlowKind,
        config: FlowConfig,
        provider: Arc<P>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let (status_tx, _) = watch::channel(UoStatus::Idle);
        Self {
            kind,
            config,
            provider,
            notifier,
            status_tx,
            last: Mutex::new(LastOutcome::default()),
        }
    }

    pub fn status(&self) -> UoStatus {
        *self.status_tx.borrow()
    }

    /// Watch status transitions; the UI renders as a pure function of these
    pub fn subscribe(&self) -> watch::Receiver<UoStatus> {
        self.status_tx.subscribe()
    }

    pub fn last_transaction(&self) -> Option<TransactionResult> {
        self.lock_last().result.clone()
    }

    pub fn last_error(&self) -> Option<String> {
        self.lock_last().error.clone()
    }

    /// Run one full attempt: validate, submit, await confirmation, retry per
    /// policy, then notify and schedule the idle reset.
    ///
    /// Returns an error without touching lifecycle state when the account is
    /// not ready, the input fails validation, or another attempt holds the
    /// flow.
    pub async fn submit(&self, intent: TransferIntent) -> Result<TransactionResult> {
        if !self.provider.is_signed_in() {
            return Err(Error::NotReady("no signed-in user".to_string()));
        }
        if !self.provider.is_ready() {
            return Err(Error::NotReady(
                "smart account is still initializing".to_string(),
            ));
        }
        let request = build_request(self.kind, &self.config, &intent)?;

        // Claim the flow: exactly one attempt may leave idle.
        let entered = self.status_tx.send_if_modified(|status| {
            if status.is_idle() {
                *status = UoStatus::Requesting;
                true
            } else {
                false
            }
        });
        if !entered {
            return Err(Error::AttemptInFlight(self.status().to_string()));
        }

        {
            let mut last = self.lock_last();
            last.result = None;
            last.error = None;
        }

        let attempt_id = Uuid::new_v4();
        info!(
            "[{attempt_id}] submitting {:?} user operation to {:#x}",
            self.kind, request.target
        );

        let outcome = self.run_attempt(attempt_id, request).await;
        match &outcome {
            Ok(result) => {
                self.set_status(UoStatus::Received);
                self.lock_last().result = Some(result.clone());
                info!(
                    "[{attempt_id}] transaction confirmed: {:#x}",
                    result.transaction_hash
                );
                self.notifier.notify(
                    Notification::info("Transaction Successful!")
                        .with_description(format!("Hash: {:#x}", result.transaction_hash)),
                );
            }
            Err(e) => {
                self.set_status(UoStatus::ErrorBundling);
                self.lock_last().error = Some(e.to_string());
                error!("[{attempt_id}] {e}");
                let title = match e {
                    Error::SubmissionRejected(_) => "Error sending user operation",
                    _ => "Error bundling user operation",
                };
                self.notifier.notify(Notification::destructive(title));
            }
        }
        self.schedule_reset();
        outcome
    }

    async fn run_attempt(
        &self,
        attempt_id: Uuid,
        request: UserOperationRequest,
    ) -> Result<TransactionResult> {
        let handle = match self.provider.send_user_operation(request).await {
            Ok(handle) => handle,
            Err(e) => return Err(Error::SubmissionRejected(e.to_string())),
        };
        debug!("[{attempt_id}] user operation accepted: {:#x}", handle.op_hash);
        self.set_status(UoStatus::Bundling);

        match self.provider.wait_for_transaction(&handle).await {
            Ok(hash) => Ok(self.confirmed(hash, 1)),
            Err(wait_error) => match self.config.retry {
                RetryPolicy::None => Err(Error::ConfirmationFailed(wait_error.to_string())),
                RetryPolicy::ReplaceOnce => {
                    warn!(
                        "[{attempt_id}] confirmation failed, replacing operation: {wait_error}"
                    );
                    self.set_status(UoStatus::Retrying);
                    let replacement = self
                        .provider
                        .drop_and_replace(&handle)
                        .await
                        .map_err(|e| Error::ReplacementFailed(e.to_string()))?;
                    debug!(
                        "[{attempt_id}] replacement accepted: {:#x}",
                        replacement.op_hash
                    );
                    match self.provider.wait_for_transaction(&replacement).await {
                        Ok(hash) => Ok(self.confirmed(hash, 2)),
                        Err(e) => Err(Error::ReplacementFailed(e.to_string())),
                    }
                }
            },
        }
    }

    fn confirmed(&self, transaction_hash: H256, attempts: u32) -> TransactionResult {
        TransactionResult {
            transaction_hash,
            attempts,
            explorer_url: self.config.network.tx_url(transaction_hash),
            confirmed_at: Utc::now(),
        }
    }

    fn set_status(&self, status: UoStatus) {
        self.status_tx.send_replace(status);
    }

    /// Terminal statuses stay visible for the cooldown, then the flow
    /// re-arms. No new attempt can start until the reset fires, so a stale
    /// reset cannot occur.
    fn schedule_reset(&self) {
        let status_tx = self.status_tx.clone();
        let cooldown = self.config.cooldown;
        tokio::spawn(async move {
            tokio::time::sleep(cooldown).await;
            status_tx.send_replace(UoStatus::Idle);
        });
    }

    fn lock_last(&self) -> std::sync::MutexGuard<'_, LastOutcome> {
        self.last.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
