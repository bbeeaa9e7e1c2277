//! Error types for the track library

use thiserror::Error;

/// Library errors
#[derive(Debug, Error)]
pub enum LibraryError {
    /// The MIME prefix used to recognise audio files is empty
    #[error("MIME prefix for audio files must not be empty")]
    EmptyMimePrefix,
}

/// Result type for library operations
pub type Result<T> = std::result::Result<T, LibraryError>;
