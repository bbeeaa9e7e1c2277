//! Controller inputs
//!
//! Two event streams feed the controller:
//! - [`PlayerCommand`]: user intent from the view layer
//! - [`SinkEvent`]: notifications from the audio sink (progress, metadata, end)
//!
//! Both are delivered serially on the host's event loop.

use serde::{Deserialize, Serialize};

/// User intent events
///
/// `F` is the raw file handle type picked by the user.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerCommand<F> {
    /// Replace the library with a new file selection
    LoadFiles(Vec<F>),

    /// Play/pause button
    PlayPause,

    /// Previous button
    Previous,

    /// Next button
    Next,

    ToggleShuffle,

    ToggleRepeat,

    /// Click on the progress bar, as a fraction of the duration
    Seek(f64),

    /// Playlist filter text changed
    Filter(String),

    /// Volume slider moved (0-100)
    SetVolume(u8),

    /// "Play" on a playlist row
    SelectTrack(usize),

    /// "Queue" on a playlist row
    QueueTrack(usize),
}

/// Notifications from the audio sink
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SinkEvent {
    /// Playback position moved (seconds)
    TimeUpdate(f64),

    /// Stream metadata arrived (duration in seconds)
    DurationKnown(f64),

    /// Track played to the end
    Ended,
}
