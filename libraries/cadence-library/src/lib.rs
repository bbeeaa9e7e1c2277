//! Cadence - Track Library
//!
//! The leaf of the Cadence playlist controller. Owns the ordered set of
//! tracks the user picked and answers lookups against it.
//!
//! This crate provides:
//! - Audio filtering of picked files (by MIME type)
//! - Display names derived from file names
//! - Case- and accent-insensitive ordering by display name
//! - Lazy, restartable search
//!
//! Files are abstracted behind [`MediaFile`], so the same library works with
//! browser `File` handles and with plain paths.
//!
//! # Example
//!
//! ```rust
//! use cadence_library::{LocalFile, PlaybackLibrary};
//!
//! let mut library = PlaybackLibrary::new();
//! library.load(vec![
//!     LocalFile::new("/music/C.mp3", "audio/mpeg"),
//!     LocalFile::new("/music/a.flac", "audio/flac"),
//!     LocalFile::new("/music/cover.jpg", "image/jpeg"),
//! ]);
//!
//! let names: Vec<&str> = library.tracks().iter().map(|t| t.display_name()).collect();
//! assert_eq!(names, ["a", "C"]);
//!
//! let hits: Vec<usize> = library.search("c").map(|(_, index)| index).collect();
//! assert_eq!(hits, [1]);
//! ```

#![forbid(unsafe_code)]

mod error;
mod file;
mod library;
pub mod types;

pub use error::{LibraryError, Result};
pub use file::{LocalFile, MediaFile};
pub use library::{display_name, PlaybackLibrary};
pub use types::{LibraryConfig, LibraryStats, Track, TrackId};
