use thiserror::Error;

/// Error for file upload and storage operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FileStoreError {
    #[error("Invalid file: {0}")]
    InvalidFile(String),

    #[error("Failed to store file: {0}")]
    StorageFailed(String),
}
