//! Cadence - Playback Control
//!
//! Playlist playback controller for a browser-resident music player.
//!
//! This crate provides:
//! - A library of user-picked audio files (via `cadence-library`)
//! - A play-next queue that takes priority over everything else
//! - Shuffle (never repeats the current track) and repeat-all
//! - Seek by fraction, volume 0-100%
//! - A view snapshot after every state change
//!
//! # Architecture
//!
//! `cadence-playback` knows nothing about the DOM:
//! - Audio output goes through the [`AudioSink`] trait
//! - Painting goes through the [`ViewRenderer`] trait
//! - The browser implementations live behind the `wasm` feature
//!
//! The host forwards user intent as [`PlayerCommand`]s and sink
//! notifications as [`SinkEvent`]s. Both are handled one at a time.
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use cadence_playback::{
//!     AudioSink, LocalFile, PlaybackConfig, PlaybackController, PlaybackSnapshot,
//!     PlaybackStatus, Result, SinkEvent,
//! };
//!
//! // A sink that discards everything
//! #[derive(Default)]
//! struct NullSink;
//!
//! impl AudioSink for NullSink {
//!     type Source = LocalFile;
//!
//!     fn open(&mut self, _source: &LocalFile) -> Result<()> { Ok(()) }
//!     fn play(&mut self) -> Result<()> { Ok(()) }
//!     fn pause(&mut self) -> Result<()> { Ok(()) }
//!     fn current_time(&self) -> f64 { 0.0 }
//!     fn set_current_time(&mut self, _seconds: f64) -> Result<()> { Ok(()) }
//!     fn duration(&self) -> Option<f64> { None }
//!     fn set_volume(&mut self, _volume: f64) -> Result<()> { Ok(()) }
//! }
//!
//! let render = |snapshot: &PlaybackSnapshot| {
//!     println!("{} tracks", snapshot.stats.count);
//! };
//! let mut controller = PlaybackController::new(NullSink, render, PlaybackConfig::default())?;
//!
//! controller.load_library(vec![
//!     LocalFile::new("/music/C.mp3", "audio/mpeg"),
//!     LocalFile::new("/music/a.flac", "audio/flac"),
//!     LocalFile::new("/music/cover.jpg", "image/jpeg"),
//! ]);
//! assert_eq!(controller.library().len(), 2);
//! assert_eq!(controller.status(), PlaybackStatus::Loaded(0));
//!
//! controller.toggle_play_pause();
//! controller.handle_sink_event(SinkEvent::Ended);
//! assert_eq!(controller.status(), PlaybackStatus::Playing(1));
//! # Ok::<(), cadence_playback::PlaybackError>(())
//! ```
//!
//! # Example: Configuration
//!
//! ```rust
//! use cadence_playback::PlaybackConfig;
//!
//! // Missing fields fall back to defaults
//! let config: PlaybackConfig = serde_json::from_str(r#"{ "volume": 60, "repeat": true }"#).unwrap();
//!
//! assert_eq!(config.volume, 60);
//! assert!(config.repeat);
//! assert!(!config.shuffle);
//! ```

mod controller;
mod error;
mod events;
mod queue;
mod shuffle;
mod sink;
mod time;
pub mod types;
mod view;
mod volume;

#[cfg(feature = "wasm")]
pub mod wasm;

// Public exports
pub use controller::PlaybackController;
pub use error::{PlaybackError, Result};
pub use events::{PlayerCommand, SinkEvent};
pub use queue::Queue;
pub use sink::AudioSink;
pub use time::format_time;
pub use types::{PlaybackConfig, PlaybackState, PlaybackStatus};
pub use view::{NowPlaying, PlaybackSnapshot, TrackView, ViewRenderer};
pub use volume::Volume;

pub use cadence_library::{
    LibraryConfig, LibraryStats, LocalFile, MediaFile, PlaybackLibrary, Track, TrackId,
};
