use thiserror::Error;

/// Error type that captures ledger and persistence failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Malformed ledger state: {0}")]
    MalformedState(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, LedgerError>;

impl LedgerError {
    pub fn is_malformed_state(&self) -> bool {
        matches!(self, LedgerError::MalformedState(_))
    }
}
