use std::fmt;
use std::path::Path;

use crate::upload::errors::FileStoreError;

/// File extensions accepted for image uploads.
pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

/// Resource family an upload belongs to; also the storage sub-directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadCategory {
    Users,
    Vendors,
}

impl UploadCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadCategory::Users => "users",
            UploadCategory::Vendors => "vendors",
        }
    }
}

impl fmt::Display for UploadCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uploaded image, validated by extension.
#[derive(Clone, PartialEq, Eq)]
pub struct Upload {
    filename: String,
    extension: String,
    bytes: Vec<u8>,
}

impl Upload {
    /// Accept an uploaded image.
    ///
    /// # Arguments
    /// * `filename` - Client supplied file name
    /// * `bytes` - File content
    ///
    /// # Errors
    /// * `InvalidFile` - Empty content or not an accepted image extension
    pub fn image(filename: impl Into<String>, bytes: Vec<u8>) -> Result<Self, FileStoreError> {
        let filename = filename.into();

        if bytes.is_empty() {
            return Err(FileStoreError::InvalidFile("file is empty".to_string()));
        }

        let extension = Path::new(&filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .filter(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
            .ok_or_else(|| {
                FileStoreError::InvalidFile(format!("unsupported image type: {}", filename))
            })?;

        Ok(Self {
            filename,
            extension,
            bytes,
        })
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Lowercased extension without the leading dot.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for Upload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Upload")
            .field("filename", &self.filename)
            .field("size", &self.bytes.len())
            .finish()
    }
}
