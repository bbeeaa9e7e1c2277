//! Platform-agnostic audio sink trait
//!
//! Abstracts the single playback primitive the controller drives (an HTML
//! `<audio>` element in the browser, a fake in tests).

use crate::error::Result;

/// Audio output the controller drives
///
/// The sink owns decoding and output. It reports progress back through
/// [`SinkEvent`](crate::SinkEvent)s that the host forwards to
/// [`PlaybackController::handle_sink_event`](crate::PlaybackController::handle_sink_event).
///
/// Opening a new source abandons the previous one: the sink stops it and
/// releases whatever handle it held for it.
pub trait AudioSink {
    /// Raw file handle the sink knows how to stream
    type Source;

    /// Point the sink at a new track (does not start playback)
    fn open(&mut self, source: &Self::Source) -> Result<()>;

    /// Start or resume playback
    fn play(&mut self) -> Result<()>;

    /// Pause playback
    fn pause(&mut self) -> Result<()>;

    /// Current playback position in seconds
    fn current_time(&self) -> f64;

    /// Jump to a position in seconds
    ///
    /// Out-of-range values are the sink's to clamp.
    fn set_current_time(&mut self, seconds: f64) -> Result<()>;

    /// Track length in seconds, `None` while metadata is pending
    fn duration(&self) -> Option<f64>;

    /// Set output volume (0.0-1.0)
    fn set_volume(&mut self, volume: f64) -> Result<()>;
}
