use super::ImageStore;
use crate::error::GalleryError;
use crate::models::{ImageRecord, RecordId};
use async_trait::async_trait;

/// A no-op store that always returns an error if called,
/// indicating the store is disabled.
pub struct NoStore;

impl NoStore {
    pub fn new() -> Self {
        NoStore
    }
}

impl Default for NoStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageStore for NoStore {
    async fn insert(&self, _data: Vec<u8>, _content_type: &str) -> Result<RecordId, GalleryError> {
        Err(GalleryError::StorageUnavailable("Image store is disabled".into()))
    }

    async fn list_all(&self) -> Result<Vec<ImageRecord>, GalleryError> {
        Err(GalleryError::StorageUnavailable("Image store is disabled".into()))
    }

    fn name(&self) -> &str {
        "disabled"
    }

    fn is_enabled(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test that inserting with NoStore returns an error.
    #[tokio::test]
    async fn test_no_store_insert() {
        let no_store = NoStore::new();
        let res = no_store.insert(vec![1, 2, 3], "image/png").await;
        assert!(
            matches!(res, Err(GalleryError::StorageUnavailable(_))),
            "Expected insert to return StorageUnavailable"
        );
    }

    /// Test that listing with NoStore returns an error.
    #[tokio::test]
    async fn test_no_store_list_all() {
        let no_store = NoStore::new();
        let res = no_store.list_all().await;
        assert!(
            matches!(res, Err(GalleryError::StorageUnavailable(_))),
            "Expected list_all to return StorageUnavailable"
        );
    }
}
