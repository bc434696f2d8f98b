// CLI module for e7song
//
// Command-line front end over the library. Every command works on a single
// container or snapshot file.

pub mod commands;
pub mod config;
pub mod output;

pub use config::Config;
pub use output::{OutputFormat, OutputFormatter};

use std::path::PathBuf;

// Error type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub enum CliError {
    FileNotFound(PathBuf),
    Decode(e7song::E7Error),
    IoError(std::io::Error),
    ParseError(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {}", path.display()),
            CliError::Decode(e) => write!(f, "Decode error: {}", e),
            CliError::IoError(e) => write!(f, "I/O error: {}", e),
            CliError::ParseError(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::IoError(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::ParseError(e.to_string())
    }
}

impl From<e7song::E7Error> for CliError {
    fn from(e: e7song::E7Error) -> Self {
        CliError::Decode(e)
    }
}
