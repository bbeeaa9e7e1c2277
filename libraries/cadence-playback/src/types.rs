//! Core types for playback control

use crate::error::{PlaybackError, Result};
use cadence_library::LibraryConfig;
use serde::{Deserialize, Serialize};

/// Playback state machine
///
/// The index always refers to a valid library position. `Loaded` is a
/// track that was opened but never started; `Paused` one that was stopped
/// mid-play (or ran out at the end of the library).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "index", rename_all = "camelCase")]
pub enum PlaybackStatus {
    /// Nothing loaded
    Empty,

    /// Track opened, not started
    Loaded(usize),

    /// Currently playing
    Playing(usize),

    /// Paused mid-track
    Paused(usize),
}

impl PlaybackStatus {
    /// Library index of the current track
    pub fn current_index(self) -> Option<usize> {
        match self {
            Self::Empty => None,
            Self::Loaded(index) | Self::Playing(index) | Self::Paused(index) => Some(index),
        }
    }

    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing(_))
    }
}

/// Read-only view of the controller state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackState {
    /// Library index of the current track (`None` = nothing loaded)
    pub current_index: Option<usize>,

    pub is_playing: bool,

    pub is_shuffle: bool,

    pub is_repeat: bool,

    /// Volume level (0-100)
    pub volume: u8,

    /// Playback position in seconds
    pub current_time: f64,

    /// Track length in seconds, `None` until metadata arrives
    pub duration: Option<f64>,
}

/// Configuration for the playback controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Initial volume (0-100, default: 100)
    pub volume: u8,

    /// Initial shuffle flag (default: off)
    pub shuffle: bool,

    /// Initial repeat flag (default: off)
    pub repeat: bool,

    /// Track library settings
    pub library: LibraryConfig,
}

impl PlaybackConfig {
    /// Check the configuration before handing it to a controller
    pub fn validate(&self) -> Result<()> {
        if self.volume > 100 {
            return Err(PlaybackError::InvalidVolume(self.volume));
        }
        self.library.validate()?;
        Ok(())
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            volume: 100,
            shuffle: false,
            repeat: false,
            library: LibraryConfig::default(),
        }
    }
}
