// Output formatting for CLI

use clap::ValueEnum;
use e7song::{FieldTable, Song};
use std::io::Write;

use super::CliResult;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// CRLF song text
    #[default]
    Text,
    /// Compact JSON
    Json,
    /// Pretty-printed JSON
    Pretty,
}

/// Format and output data
pub struct OutputFormatter {
    format: OutputFormat,
    quiet: bool,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    /// Output a song
    pub fn output_song(&self, song: &Song, writer: &mut impl Write) -> CliResult<()> {
        match self.format {
            OutputFormat::Text => {
                writer.write_all(song.to_text().as_bytes())?;
                writeln!(writer)?;
            }
            OutputFormat::Json => writeln!(writer, "{}", song.to_json()?)?,
            OutputFormat::Pretty => writeln!(writer, "{}", song.to_json_pretty()?)?,
        }
        Ok(())
    }

    /// Output a field table; text mode lists value sizes only
    pub fn output_fields(&self, fields: &FieldTable, writer: &mut impl Write) -> CliResult<()> {
        match self.format {
            OutputFormat::Text => {
                let width = fields.keys().map(|k| k.chars().count()).max().unwrap_or(0);
                for (key, value) in fields {
                    writeln!(
                        writer,
                        "{:<width$}  {} chars",
                        key,
                        value.chars().count(),
                        width = width
                    )?;
                }
            }
            OutputFormat::Json => writeln!(writer, "{}", serde_json::to_string(fields)?)?,
            OutputFormat::Pretty => writeln!(writer, "{}", serde_json::to_string_pretty(fields)?)?,
        }
        Ok(())
    }

    /// Print success message
    pub fn print_success(&self, message: &str) {
        if !self.quiet {
            eprintln!("✓ {}", message);
        }
    }

    /// Print error message
    pub fn print_error(&self, message: &str) {
        eprintln!("{}", error_line(message));
    }

    /// Print info message
    pub fn print_info(&self, message: &str) {
        if !self.quiet {
            eprintln!("  {}", message);
        }
    }
}

/// Error line as shown on stderr
pub fn error_line(message: &str) -> String {
    format!("✗ {}", message)
}
