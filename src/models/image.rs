use serde::{Deserialize, Serialize};

/// Identifier assigned by the store when a record is inserted.
pub type RecordId = String;

/// One uploaded image: its raw bytes and the MIME type the client declared.
///
/// Records are never updated once stored.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ImageRecord {
    pub id: RecordId,
    pub data: Vec<u8>,
    pub content_type: String,
}

impl ImageRecord {
    pub fn new(id: RecordId, data: Vec<u8>, content_type: impl Into<String>) -> Self {
        ImageRecord {
            id,
            data,
            content_type: content_type.into(),
        }
    }
}
