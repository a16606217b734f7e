use serde::{Deserialize, Serialize};

/// A single NoSQL document. `etag` supports optimistic updates: a write
/// conditioned on a stale `etag` raises `ConflictError`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub collection: String,
    pub key: String,
    pub data: serde_json::Value,
    pub etag: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PutDocumentParams {
    pub collection: String,
    pub key: String,
    pub data: serde_json::Value,
    /// When set, the write only succeeds if the stored etag matches.
    pub expected_etag: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentQuery {
    pub collection: String,
    /// Partial-match filter: every key/value here must equal the stored
    /// document's field at that key.
    #[serde(default)]
    pub filter: serde_json::Map<String, serde_json::Value>,
}
