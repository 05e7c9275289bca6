use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Account provider not ready: {0}")]
    NotReady(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid recipient address: {0}")]
    InvalidRecipient(String),
    #[error("Unrecognized token selector: {0}")]
    UnknownToken(String),
    #[error("Amount {requested} exceeds available balance {available}")]
    InsufficientBalance { requested: String, available: String },
    #[error("A user operation is already in flight (status: {0})")]
    AttemptInFlight(String),
    #[error("User operation rejected at submission: {0}")]
    SubmissionRejected(String),
    #[error("User operation was not confirmed: {0}")]
    ConfirmationFailed(String),
    #[error("Replacement user operation failed: {0}")]
    ReplacementFailed(String),
    #[error("Balance subscription error: {0}")]
    BalanceSubscription(String),
    #[error("Provider error: {0}")]
    Provider(String),
}
