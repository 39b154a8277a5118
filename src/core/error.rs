//! Error types for document and history persistence

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the editor core
#[derive(Debug, Error)]
pub enum EditorError {
    /// A document could not be read
    #[error("Failed to read file {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A document or the history file could not be written
    #[error("Failed to write file {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The history file exists but is not a JSON array of strings
    #[error("Malformed history file {}: {}", .path.display(), .source)]
    HistoryParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize history: {0}")]
    HistoryEncode(#[from] serde_json::Error),

    #[error("Invalid font name, size, or style")]
    InvalidFont,

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// The user dismissed a dialog
    #[error("Operation cancelled")]
    Cancelled,
}

impl EditorError {
    /// Whether this error should be swallowed instead of shown to the user
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

pub type Result<T> = std::result::Result<T, EditorError>;
