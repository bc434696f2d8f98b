// Error types for e7song

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while decoding a container or handling a snapshot.
#[derive(Debug, Error)]
pub enum E7Error {
    /// The file could not be opened or read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("file does not exist ({})", .0.display())]
    FileNotFound(PathBuf),

    /// The file was read but held no bytes.
    #[error("could not load file ({})", .0.display())]
    EmptyContent(PathBuf),

    /// The `type:e7impress.song` marker is absent.
    #[error("invalid file contents ({})", .0.display())]
    SignatureMismatch(PathBuf),

    /// A required key is absent from a decoded field table.
    #[error("missing field: {0}")]
    FieldMissing(&'static str),

    /// A namespace entry has no matching content entry.
    #[error("verse not found ({key}: {name})")]
    VerseUnresolved { key: String, name: String },

    #[error("snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// Result alias using [`E7Error`].
pub type Result<T> = std::result::Result<T, E7Error>;
