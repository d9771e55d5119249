use async_trait::async_trait;

use crate::upload::errors::FileStoreError;
use crate::upload::models::Upload;
use crate::upload::models::UploadCategory;

/// Storage for uploaded files.
#[async_trait]
pub trait FileStore: Send + Sync + 'static {
    /// Persist an upload under a category.
    ///
    /// # Arguments
    /// * `upload` - Validated upload
    /// * `category` - Resource family the file belongs to
    ///
    /// # Returns
    /// Reference name of the stored file, relative to the storage root
    ///
    /// # Errors
    /// * `StorageFailed` - The file could not be written
    async fn save(&self, upload: Upload, category: UploadCategory)
        -> Result<String, FileStoreError>;

    /// Remove a previously stored file by the reference `save` returned.
    async fn delete(&self, reference: &str) -> Result<(), FileStoreError>;
}
