use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::error::GalleryError;
use crate::models::{ImageRecord, RecordId};
use crate::store::ImageStore;

/// The in-memory backend takes no options.
#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, Default)]
pub struct MemoryStoreConfig {}

/// Process-local store keeping records in insertion order.
///
/// Useful for local development and tests; nothing survives a restart.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<Vec<ImageRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ImageStore for MemoryStore {
    async fn insert(&self, data: Vec<u8>, content_type: &str) -> Result<RecordId, GalleryError> {
        let id = Uuid::new_v4().to_string();
        debug!(id = %id, bytes = data.len(), content_type, "Storing image in memory");
        self.records
            .write()
            .await
            .push(ImageRecord::new(id.clone(), data, content_type));
        Ok(id)
    }

    async fn list_all(&self) -> Result<Vec<ImageRecord>, GalleryError> {
        Ok(self.records.read().await.clone())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
