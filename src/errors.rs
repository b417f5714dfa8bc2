use thiserror::Error;

/// Error type that captures ledger input failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("Invalid date `{0}`: expected a calendar date formatted as YYYY-MM-DD")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Failures raised while loading or saving the shell configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Unknown setting `{0}` (expected currency, chart_width or plain_mode)")]
    UnknownKey(String),
    #[error("Invalid value `{value}` for `{key}`")]
    InvalidValue { key: String, value: String },
}
