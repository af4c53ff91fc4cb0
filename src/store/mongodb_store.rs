use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::spec::BinarySubtype;
use mongodb::bson::{doc, oid::ObjectId, Binary};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::GalleryError;
use crate::models::{ImageRecord, RecordId};
use crate::store::ImageStore;

/// The config struct for MongoDB connections.
/// Contains the URI, database name and the collection holding the images.
#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone)]
pub struct MongoDBConfig {
    pub uri: String,
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_collection")]
    pub collection: String,
}

fn default_database() -> String {
    "galleria".to_string()
}

fn default_collection() -> String {
    "photos".to_string()
}

impl Default for MongoDBConfig {
    fn default() -> Self {
        MongoDBConfig {
            uri: "mongodb://localhost:27017".to_string(),
            database: default_database(),
            collection: default_collection(),
        }
    }
}

/// A concrete `ImageStore` implementation that uses MongoDB.
pub struct MongoDBStore {
    photo_collection: Collection<PhotoDocument>,
}

/// Document shape for storing images in MongoDB.
///
/// `{ _id, photo: { data, contentType } }`, the layout existing gallery
/// collections already use.
#[derive(Serialize, Deserialize, Clone, Debug)]
struct PhotoDocument {
    _id: ObjectId,
    #[serde(default)]
    photo: PhotoPayload,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
struct PhotoPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<Binary>,
    #[serde(rename = "contentType", default)]
    content_type: String,
}

impl MongoDBStore {
    /// Creates a new `MongoDBStore` from the given config.
    /// It parses the URI, creates the client and pings the server once.
    pub async fn new(config: &MongoDBConfig) -> Result<Self, GalleryError> {
        info!("Connecting to MongoDB database '{}'", config.database);

        // Parse the connection string from the config
        let mut client_options = ClientOptions::parse(&config.uri).await.map_err(|e| {
            GalleryError::StorageUnavailable(format!("Failed to parse MongoDB URI: {}", e))
        })?;

        client_options.app_name = Some("Galleria".to_string());

        let client = Client::with_options(client_options).map_err(|e| {
            GalleryError::StorageUnavailable(format!("Failed to create MongoDB client: {}", e))
        })?;

        let database = client.database(&config.database);

        // The driver connects lazily; ping so an unreachable server fails startup.
        database
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                GalleryError::StorageUnavailable(format!("Failed to reach MongoDB: {}", e))
            })?;

        info!("MongoDB connection established successfully.");

        let photo_collection = database.collection::<PhotoDocument>(&config.collection);

        Ok(Self { photo_collection })
    }

    /// Helper function to convert raw upload data to our `PhotoDocument`.
    fn record_to_doc(data: Vec<u8>, content_type: &str) -> PhotoDocument {
        PhotoDocument {
            _id: ObjectId::new(),
            photo: PhotoPayload {
                data: Some(Binary {
                    subtype: BinarySubtype::Generic,
                    bytes: data,
                }),
                content_type: content_type.to_string(),
            },
        }
    }

    /// Convert a `PhotoDocument` back into an `ImageRecord`.
    fn doc_to_record(doc: PhotoDocument) -> ImageRecord {
        ImageRecord::new(
            doc._id.to_hex(),
            doc.photo.data.map(|b| b.bytes).unwrap_or_default(),
            doc.photo.content_type,
        )
    }
}

#[async_trait]
impl ImageStore for MongoDBStore {
    async fn insert(&self, data: Vec<u8>, content_type: &str) -> Result<RecordId, GalleryError> {
        let photo_doc = Self::record_to_doc(data, content_type);
        let id = photo_doc._id.to_hex();

        self.photo_collection
            .insert_one(photo_doc, None)
            .await
            .map_err(|e| GalleryError::StorageUnavailable(format!("Failed to insert photo: {}", e)))?;

        debug!(id = %id, "Inserted photo document.");
        Ok(id)
    }

    async fn list_all(&self) -> Result<Vec<ImageRecord>, GalleryError> {
        let mut cursor = self
            .photo_collection
            .find(None, None)
            .await
            .map_err(|e| GalleryError::StorageUnavailable(format!("Failed to list photos: {}", e)))?;

        let mut records = Vec::new();
        while let Some(photo_doc) = cursor.try_next().await.map_err(|e| {
            GalleryError::StorageUnavailable(format!("Failed to read photo document: {}", e))
        })? {
            records.push(Self::doc_to_record(photo_doc));
        }

        debug!("Read {} photo documents.", records.len());
        Ok(records)
    }

    fn name(&self) -> &str {
        "mongo"
    }
}
