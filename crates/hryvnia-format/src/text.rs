//! Plain text output format.

use std::io::Write;

use crate::{FormatError, FormattedLine, Formatter};

/// Writes each line in its human-readable form, one per row.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter;

impl TextFormatter {
    /// Creates a new text formatter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Formatter for TextFormatter {
    fn write_lines<W: Write + Send>(
        &self,
        lines: &[FormattedLine],
        mut writer: W,
    ) -> Result<(), FormatError> {
        for line in lines {
            writeln!(writer, "{line}")?;
        }
        writer.flush()?;
        Ok(())
    }
}
