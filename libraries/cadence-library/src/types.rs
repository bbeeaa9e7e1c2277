//! Core types for the track library

use crate::error::{LibraryError, Result};
use crate::file::MediaFile;
use crate::library::{display_name, sort_key};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Track identifier
///
/// Opaque handle, unique per loaded file. Loading the same file twice
/// yields two different ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(String);

impl TrackId {
    /// Generate a new random track ID
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A loaded track
///
/// Immutable once created. `F` is the raw file handle the audio sink uses
/// to obtain a playable stream.
#[derive(Debug, Clone)]
pub struct Track<F> {
    id: TrackId,
    file_name: String,
    display_name: String,
    /// Lowercased display name, used for search and sort ties
    search_key: String,
    /// Accent-folded, lowercased display name, used for ordering
    sort_key: String,
    mime_type: String,
    source: F,
}

impl<F: MediaFile> Track<F> {
    /// Build a track from a raw file handle
    pub fn from_file(source: F) -> Self {
        let file_name = source.file_name();
        let display_name = display_name(&file_name).to_string();
        let search_key = display_name.to_lowercase();
        let sort_key = sort_key(&display_name);

        Self {
            id: TrackId::generate(),
            mime_type: source.mime_type(),
            file_name,
            display_name,
            search_key,
            sort_key,
            source,
        }
    }
}

impl<F> Track<F> {
    pub fn id(&self) -> &TrackId {
        &self.id
    }

    /// Original file name, extension included
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// File name with the extension stripped
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Raw file handle backing this track
    pub fn source(&self) -> &F {
        &self.source
    }

    pub(crate) fn search_key(&self) -> &str {
        &self.search_key
    }

    pub(crate) fn sort_key(&self) -> &str {
        &self.sort_key
    }
}

/// Library statistics shown next to the playlist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LibraryStats {
    /// Number of tracks in the library
    pub count: usize,
}

/// Configuration for the track library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// MIME type prefix a file must carry to be loaded (default: "audio/")
    pub mime_prefix: String,
}

impl LibraryConfig {
    /// Check the configuration for values the library cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.mime_prefix.is_empty() {
            return Err(LibraryError::EmptyMimePrefix);
        }
        Ok(())
    }
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            mime_prefix: "audio/".to_string(),
        }
    }
}
