//! Error types for playback control
//!
//! None of these reach the user. The controller logs them and carries on.

use cadence_library::LibraryError;
use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Index outside the current library
    #[error("Index out of bounds: {0}")]
    InvalidIndex(usize),

    /// Stream metadata has not arrived yet
    #[error("Duration not known yet")]
    UnknownDuration,

    /// No track is currently loaded
    #[error("No track loaded")]
    NoTrackLoaded,

    /// Seek fraction is NaN or infinite
    #[error("Invalid seek fraction: {0}")]
    InvalidSeek(f64),

    /// Volume outside 0-100
    #[error("Invalid volume: {0} (expected 0-100)")]
    InvalidVolume(u8),

    /// Audio sink rejected an operation
    #[error("Audio sink error: {0}")]
    Sink(String),

    /// Library configuration error
    #[error(transparent)]
    Library(#[from] LibraryError),
}

impl PlaybackError {
    /// Create an audio sink error
    pub fn sink(msg: impl Into<String>) -> Self {
        Self::Sink(msg.into())
    }
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
