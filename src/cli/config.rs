// CLI configuration
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

use super::OutputFormat;

/// e7song - e7impress song container tool
#[derive(Parser, Debug)]
#[command(name = "e7song")]
#[command(about = "Decode e7impress song containers into text or JSON", long_about = None)]
#[command(version)]
pub struct Config {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Quiet mode (only errors are logged)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (log decoding details)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode a container and print the song
    Show {
        /// Container file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Decode a container and write a JSON snapshot
    Save {
        /// Container file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Snapshot file to write
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Print a song from a JSON snapshot
    Render {
        /// Snapshot file
        #[arg(value_name = "SNAPSHOT")]
        snapshot: PathBuf,
    },

    /// Print the top-level fields of a container
    Fields {
        /// Container file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Show { .. } => "show",
            Commands::Save { .. } => "save",
            Commands::Render { .. } => "render",
            Commands::Fields { .. } => "fields",
        }
    }
}

impl Config {
    /// Log level selected by --quiet / --verbose
    pub fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else if self.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        }
    }
}
