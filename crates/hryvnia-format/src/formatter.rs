//! Output format abstraction.

use std::io::Write;
use thiserror::Error;

use crate::FormattedLine;

/// Errors that can occur during formatting.
#[derive(Error, Debug)]
pub enum FormatError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Trait for output formatters.
pub trait Formatter: Send + Sync {
    /// Writes rate lines to the output, in the order given.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_lines<W: Write + Send>(
        &self,
        lines: &[FormattedLine],
        writer: W,
    ) -> Result<(), FormatError>;
}
