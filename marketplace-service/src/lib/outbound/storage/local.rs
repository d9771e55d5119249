use std::path::Path;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use uuid::Uuid;

use crate::upload::errors::FileStoreError;
use crate::upload::models::Upload;
use crate::upload::models::UploadCategory;
use crate::upload::ports::FileStore;

/// Stores uploads on the local filesystem as `<root>/<category>/<uuid>.<ext>`.
///
/// The returned reference is the path relative to the root, which is also the
/// path the file is served under below `/uploads`.
pub struct LocalFileStore {
    root: PathBuf,
}

impl LocalFileStore {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn save(
        &self,
        upload: Upload,
        category: UploadCategory,
    ) -> Result<String, FileStoreError> {
        let dir = self.root.join(category.as_str());
        fs::create_dir_all(&dir).await.map_err(|e| {
            FileStoreError::StorageFailed(format!("Failed to create upload directory: {}", e))
        })?;

        let file_name = format!("{}.{}", Uuid::new_v4(), upload.extension());

        fs::write(dir.join(&file_name), upload.bytes())
            .await
            .map_err(|e| FileStoreError::StorageFailed(format!("Failed to write upload: {}", e)))?;

        let reference = format!("{}/{}", category, file_name);
        tracing::debug!(reference = %reference, "Stored upload");

        Ok(reference)
    }

    async fn delete(&self, reference: &str) -> Result<(), FileStoreError> {
        // References are always `<category>/<file>`; nothing else is ours to remove.
        let is_stored_reference = matches!(
            reference.split('/').collect::<Vec<_>>().as_slice(),
            [category, file]
                if [UploadCategory::Users, UploadCategory::Vendors]
                    .iter()
                    .any(|c| c.as_str() == *category)
                    && !file.is_empty()
                    && !file.starts_with('.')
        );
        if !is_stored_reference {
            return Err(FileStoreError::StorageFailed(format!(
                "Not a stored upload: {}",
                reference
            )));
        }

        fs::remove_file(self.root.join(reference))
            .await
            .map_err(|e| FileStoreError::StorageFailed(format!("Failed to remove upload: {}", e)))?;

        tracing::debug!(reference = %reference, "Removed upload");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_root() -> PathBuf {
        std::env::temp_dir().join(format!("marketplace-uploads-{}", Uuid::new_v4()))
    }

    #[tokio::test]
    async fn test_save_writes_under_category() {
        let root = temp_root();
        let store = LocalFileStore::new(&root);
        let upload = Upload::image("Avatar.PNG", vec![1, 2, 3]).unwrap();

        let reference = store.save(upload, UploadCategory::Users).await.unwrap();

        assert!(reference.starts_with("users/"));
        assert!(reference.ends_with(".png"));
        assert_eq!(fs::read(root.join(&reference)).await.unwrap(), vec![1, 2, 3]);

        fs::remove_dir_all(&root).await.unwrap();
    }

    #[tokio::test]
    async fn test_save_generates_unique_names() {
        let root = temp_root();
        let store = LocalFileStore::new(&root);

        let first = store
            .save(Upload::image("a.jpg", vec![1]).unwrap(), UploadCategory::Vendors)
            .await
            .unwrap();
        let second = store
            .save(Upload::image("a.jpg", vec![1]).unwrap(), UploadCategory::Vendors)
            .await
            .unwrap();

        assert_ne!(first, second);

        fs::remove_dir_all(&root).await.unwrap();
    }

    #[tokio::test]
    async fn test_save_fails_when_root_is_a_file() {
        let root = temp_root();
        fs::write(&root, b"not a directory").await.unwrap();
        let store = LocalFileStore::new(&root);

        let result = store
            .save(Upload::image("a.gif", vec![1]).unwrap(), UploadCategory::Users)
            .await;

        assert!(matches!(result, Err(FileStoreError::StorageFailed(_))));

        fs::remove_file(&root).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_removes_stored_file() {
        let root = temp_root();
        let store = LocalFileStore::new(&root);
        let reference = store
            .save(Upload::image("me.png", vec![1]).unwrap(), UploadCategory::Users)
            .await
            .unwrap();

        store.delete(&reference).await.unwrap();

        assert!(!root.join(&reference).exists());
        assert!(matches!(
            store.delete(&reference).await,
            Err(FileStoreError::StorageFailed(_))
        ));

        fs::remove_dir_all(&root).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_refuses_paths_outside_categories() {
        let root = temp_root();
        fs::create_dir_all(root.join("users")).await.unwrap();
        fs::write(root.join("keep.txt"), b"x").await.unwrap();
        let store = LocalFileStore::new(&root);

        for reference in ["keep.txt", "users/../keep.txt", "users/..", "users/", "/etc/passwd"] {
            assert!(
                matches!(
                    store.delete(reference).await,
                    Err(FileStoreError::StorageFailed(_))
                ),
                "removed: {}",
                reference
            );
        }
        assert!(root.join("keep.txt").exists());

        fs::remove_dir_all(&root).await.unwrap();
    }
}
