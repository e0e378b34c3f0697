//! Error types for hryvnia.

use thiserror::Error;

/// Result type alias for hryvnia operations.
pub type Result<T> = std::result::Result<T, HryvniaError>;

/// Errors that can occur outside the soft-failure fetch path.
#[derive(Error, Debug)]
pub enum HryvniaError {
    /// HTTP client could not be set up.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Invalid currency code.
    #[error(transparent)]
    Currency(#[from] CurrencyCodeError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error for strings that are not three-letter currency codes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurrencyCodeError {
    /// Code is not exactly three characters long.
    #[error("Invalid currency code {0:?}: expected 3 letters")]
    InvalidLength(String),

    /// Code contains something other than ASCII letters.
    #[error("Invalid currency code {0:?}: only letters are allowed")]
    NonAlphabetic(String),
}
