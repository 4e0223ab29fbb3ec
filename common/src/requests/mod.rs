use serde::{Deserialize, Serialize};

/// Response body of a successful insert: the store-assigned identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertedDocument {
    pub id: String,
}

/// Response body of the blob URL lookup endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlobUrl {
    pub url: String,
}

/// Name of the server-sent event carrying a full collection snapshot.
pub const SNAPSHOT_EVENT: &str = "snapshot";
