//! Error types for the log player

use std::path::PathBuf;
use thiserror::Error;

/// Result type for player operations
pub type Result<T> = std::result::Result<T, PlayerError>;

/// Errors that can abort a playback session
#[derive(Debug, Error)]
pub enum PlayerError {
    /// Missing or invalid options, detected before playback starts
    #[error("configuration error: {0}")]
    Config(String),

    /// A file name did not contain a usable timestamp
    #[error("no timestamp found in file name: {0}")]
    TimestampParse(String),

    /// Missing folder or unreadable file
    #[error("filesystem error at {path}: {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("transport error: {0}")]
    Transport(String),
}

impl PlayerError {
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PlayerError::Filesystem {
            path: path.into(),
            source,
        }
    }
}
