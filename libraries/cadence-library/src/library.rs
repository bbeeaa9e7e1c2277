//! Ordered track library
//!
//! Holds the tracks of the current session, sorted by display name.
//! Loading replaces the whole set; there is no incremental add.

use crate::error::Result;
use crate::file::MediaFile;
use crate::types::{LibraryConfig, LibraryStats, Track, TrackId};
use std::cmp::Ordering;
use tracing::debug;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Derive a display name from a file name
///
/// Strips the final `.ext` suffix, where `ext` is one or more characters
/// containing neither `.` nor `/`. Names without such a suffix are returned
/// unchanged.
///
/// ```rust
/// use cadence_library::display_name;
///
/// assert_eq!(display_name("Song.mp3"), "Song");
/// assert_eq!(display_name("archive.tar.gz"), "archive.tar");
/// assert_eq!(display_name("README"), "README");
/// ```
pub fn display_name(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(dot) if dot + 1 < file_name.len() && !file_name[dot + 1..].contains('/') => {
            &file_name[..dot]
        }
        _ => file_name,
    }
}

/// Collation key for a display name
///
/// Decomposes to NFD, drops combining marks and lowercases, so "Éclair"
/// sorts next to "eclair" instead of after "z".
pub(crate) fn sort_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Case- and accent-insensitive order with deterministic tie-breaks
///
/// Unaccented names come before accented ones that fold to the same key,
/// then uppercase before lowercase.
fn compare_tracks<F>(a: &Track<F>, b: &Track<F>) -> Ordering {
    a.sort_key()
        .cmp(b.sort_key())
        .then_with(|| a.search_key().cmp(b.search_key()))
        .then_with(|| a.display_name().cmp(b.display_name()))
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// The loaded track library
///
/// Tracks are kept sorted by display name (case- and accent-insensitive). Indices
/// handed out by [`search`](Self::search) and [`get`](Self::get) stay valid
/// until the next [`load`](Self::load).
#[derive(Debug, Clone)]
pub struct PlaybackLibrary<F> {
    tracks: Vec<Track<F>>,
    config: LibraryConfig,
}

impl<F> PlaybackLibrary<F> {
    /// Create an empty library with the default configuration
    pub fn new() -> Self {
        Self {
            tracks: Vec::new(),
            config: LibraryConfig::default(),
        }
    }

    /// Create an empty library with a custom configuration
    pub fn with_config(config: LibraryConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            tracks: Vec::new(),
            config,
        })
    }

    /// All tracks in library order
    pub fn tracks(&self) -> &[Track<F>] {
        &self.tracks
    }

    pub fn get(&self, index: usize) -> Option<&Track<F>> {
        self.tracks.get(index)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Library position of a track, if it is still loaded
    pub fn position_of(&self, id: &TrackId) -> Option<usize> {
        self.tracks.iter().position(|track| track.id() == id)
    }

    pub fn stats(&self) -> LibraryStats {
        LibraryStats {
            count: self.tracks.len(),
        }
    }

    /// Search tracks by display name
    ///
    /// Case-insensitive substring match. Yields `(track, index)` pairs in
    /// library order. The iterator is lazy and holds no state beyond the
    /// query, so calling `search` again restarts from the beginning.
    pub fn search<'a>(
        &'a self,
        query: &str,
    ) -> impl Iterator<Item = (&'a Track<F>, usize)> + 'a {
        let needle = query.to_lowercase();
        self.tracks
            .iter()
            .enumerate()
            .filter(move |(_, track)| track.search_key().contains(needle.as_str()))
            .map(|(index, track)| (track, index))
    }
}

impl<F: MediaFile> PlaybackLibrary<F> {
    /// Check whether a file is playable audio, judged by its MIME type
    pub fn is_audio(&self, file: &F) -> bool {
        let mime = file.mime_type();
        let prefix = self.config.mime_prefix.as_str();
        mime.get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    }

    /// Replace the library with the audio files from `files`
    ///
    /// Non-audio files are skipped without error. The previous tracks are
    /// dropped. Returns the new tracks in library order.
    pub fn load<I>(&mut self, files: I) -> &[Track<F>]
    where
        I: IntoIterator<Item = F>,
    {
        let mut skipped = 0usize;
        let mut tracks: Vec<Track<F>> = files
            .into_iter()
            .filter_map(|file| {
                if self.is_audio(&file) {
                    Some(Track::from_file(file))
                } else {
                    debug!(
                        file = %file.file_name(),
                        mime = %file.mime_type(),
                        "Skipping non-audio file"
                    );
                    skipped += 1;
                    None
                }
            })
            .collect();

        tracks.sort_by(compare_tracks);

        debug!(loaded = tracks.len(), skipped, "Library loaded");
        self.tracks = tracks;
        &self.tracks
    }
}

impl<F> Default for PlaybackLibrary<F> {
    fn default() -> Self {
        Self::new()
    }
}
