use thiserror::Error;

/// Rejection of raw form input; always raised before any state mutation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("`{0}` is not a number")]
    NotANumber(String),
    #[error("amount must be greater than zero")]
    NonPositiveAmount,
    #[error("budget cannot be negative")]
    NegativeBudget,
    #[error("amounts may carry at most two decimal places")]
    TooPrecise,
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),
    #[error("`{0}` is not a transaction type")]
    UnknownKind(String),
}

/// Failure to read or write the transaction record file.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Error type that captures every tracker failure.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}
