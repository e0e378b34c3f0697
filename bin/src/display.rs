//! Display utilities and output formatting for the hryvnia CLI.

use anyhow::Result;
use clap::ValueEnum;
use hryvnia_lib::prelude::*;
use std::io::Write;

/// Output format for rate lines.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Text,
    Json,
    Ndjson,
}

/// Write rate lines in the specified format.
pub(crate) fn write_lines<W: Write + Send>(
    lines: &[FormattedLine],
    writer: W,
    format: Format,
) -> Result<()> {
    match format {
        Format::Text => TextFormatter::new().write_lines(lines, writer)?,
        Format::Json => JsonFormatter::new().write_lines(lines, writer)?,
        Format::Ndjson => JsonFormatter::ndjson().write_lines(lines, writer)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hryvnia_lib::{Quote, Rate};

    fn lines() -> Vec<FormattedLine> {
        vec![FormattedLine {
            date: "01.06.2024".to_string(),
            quotes: vec![Quote {
                code: CurrencyCode::new("EUR").unwrap(),
                buy: Rate::new(39.2),
                sale: Rate::new(39.9),
            }],
        }]
    }

    #[test]
    fn test_text_output() {
        let mut output = Vec::new();
        write_lines(&lines(), &mut output, Format::Text).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "01.06.2024 --- EUR: buy: 39.2, sale: 39.9\n"
        );
    }

    #[test]
    fn test_ndjson_output() {
        let mut output = Vec::new();
        write_lines(&lines(), &mut output, Format::Ndjson).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("{\"date\":\"01.06.2024\""));
    }
}
