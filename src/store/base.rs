use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use super::{memory_store::MemoryStore, mongodb_store::MongoDBStore, no_store::NoStore};
use crate::config::{StoreBackend, StoreConfig};
use crate::error::GalleryError;
use crate::models::{ImageRecord, RecordId};

/// The ImageStore trait abstracts image persistence (insert, full scan).
///
/// Backends are the only code that touches the underlying storage.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Persists a new record and returns the identifier the backend assigned.
    async fn insert(&self, data: Vec<u8>, content_type: &str) -> Result<RecordId, GalleryError>;

    /// Returns every stored record in the backend's native order.
    async fn list_all(&self) -> Result<Vec<ImageRecord>, GalleryError>;

    fn name(&self) -> &str;

    fn is_enabled(&self) -> bool {
        // Only NoStore reports false, so startup can log what happened.
        true
    }
}

/// Creates a concrete store implementation based on the StoreConfig.
/// If `store.enabled = false`, returns NoStore. Otherwise, picks the specified backend.
pub async fn create_store(config: &StoreConfig) -> Result<Arc<dyn ImageStore>, GalleryError> {
    if !config.enabled {
        info!("Image store is disabled. Using NoStore.");
        return Ok(Arc::new(NoStore::new()));
    }

    match &config.backend {
        Some(StoreBackend::MongoDB(mongo_config)) => {
            let store = MongoDBStore::new(mongo_config).await.map_err(|e| {
                error!("Failed to create MongoDB store: {}", e);
                e
            })?;
            info!("Successfully created MongoDB store.");
            Ok(Arc::new(store))
        }
        Some(StoreBackend::Memory(_)) => {
            info!("Using in-memory image store; uploads are lost on restart.");
            Ok(Arc::new(MemoryStore::new()))
        }
        None => {
            error!("Store is enabled, but no backend config is provided!");
            Err(GalleryError::StorageUnavailable(
                "store is enabled but no backend is configured".to_string(),
            ))
        }
    }
}
