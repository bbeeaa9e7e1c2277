//! Browser file handles

use cadence_library::MediaFile;
use web_sys::{Blob, File};

/// A `File` picked through `<input type="file">`
#[derive(Debug, Clone)]
pub struct BrowserFile(File);

impl BrowserFile {
    pub fn new(file: File) -> Self {
        Self(file)
    }

    pub fn as_blob(&self) -> &Blob {
        &self.0
    }
}

impl From<File> for BrowserFile {
    fn from(file: File) -> Self {
        Self(file)
    }
}

impl MediaFile for BrowserFile {
    fn file_name(&self) -> String {
        self.0.name()
    }

    fn mime_type(&self) -> String {
        self.0.type_()
    }
}
