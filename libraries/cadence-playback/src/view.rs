//! View snapshots
//!
//! After every state change the controller hands a [`PlaybackSnapshot`] to
//! its [`ViewRenderer`]. The snapshot carries everything the playlist, the
//! now-playing panel and the transport controls need, already formatted,
//! so the renderer never has to query the controller back.

use crate::types::PlaybackState;
use cadence_library::LibraryStats;
use serde::Serialize;

/// Paints snapshots
///
/// Implemented for any `FnMut(&PlaybackSnapshot)`, so a closure is enough
/// for simple hosts and tests.
pub trait ViewRenderer {
    fn render(&mut self, snapshot: &PlaybackSnapshot);
}

impl<T> ViewRenderer for T
where
    T: FnMut(&PlaybackSnapshot),
{
    fn render(&mut self, snapshot: &PlaybackSnapshot) {
        self(snapshot);
    }
}

/// One playlist row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackView {
    /// Track identifier (stable for the lifetime of the library)
    pub id: String,

    /// Library index, used for select/queue commands
    pub index: usize,

    pub display_name: String,

    /// This row is the loaded track
    pub is_current: bool,

    /// This row is the loaded track and it is playing
    pub is_playing: bool,

    /// This row is waiting in the play-next queue
    pub is_queued: bool,
}

/// Now-playing panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NowPlaying {
    pub display_name: String,

    /// 1-based position in the library ("Track 3 of 12")
    pub position: usize,

    /// Library size
    pub total: usize,
}

/// Everything a view needs to paint the player
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackSnapshot {
    /// Playlist rows matching the current filter, in library order
    pub tracks: Vec<TrackView>,

    /// Whole-library statistics (not affected by the filter)
    pub stats: LibraryStats,

    pub state: PlaybackState,

    pub now_playing: Option<NowPlaying>,

    /// Play-next queue, front first
    pub queue: Vec<usize>,

    /// Active playlist filter
    pub filter: String,

    pub current_time_label: String,

    pub duration_label: String,

    /// Progress bar fill (0-100)
    pub progress_percent: f64,

    pub volume_label: String,
}

impl PlaybackSnapshot {
    /// Row for a library index, if it passes the filter
    pub fn track(&self, index: usize) -> Option<&TrackView> {
        self.tracks.iter().find(|row| row.index == index)
    }
}

/// Progress bar fill for a position within a duration
pub(crate) fn progress_percent(current_time: f64, duration: Option<f64>) -> f64 {
    match duration {
        Some(duration) if duration > 0.0 => (current_time / duration * 100.0).clamp(0.0, 100.0),
        _ => 0.0,
    }
}
