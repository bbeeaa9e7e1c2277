//! Raw file handles
//!
//! Abstracts the files a user picks, so the library does not care whether
//! they come from a browser file picker or a local path.

use std::path::{Path, PathBuf};

/// A raw file the user selected
pub trait MediaFile {
    /// File name including extension, without directories
    fn file_name(&self) -> String;

    /// MIME type reported for the file (may be empty when unknown)
    fn mime_type(&self) -> String;
}

/// File on the local filesystem with a known MIME type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    path: PathBuf,
    mime_type: String,
}

impl LocalFile {
    pub fn new(path: impl Into<PathBuf>, mime_type: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            mime_type: mime_type.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MediaFile for LocalFile {
    fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    fn mime_type(&self) -> String {
        self.mime_type.clone()
    }
}
