use serde::{Deserialize, Serialize};

/// Metadata returned alongside an object's bytes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectMetadata {
    pub content_type: Option<String>,
    pub etag: String,
    pub size: u64,
    pub last_modified: jiff::Timestamp,
}

/// The bytes of an object plus its metadata, as returned by `getObject`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectData {
    pub data: Vec<u8>,
    pub metadata: ObjectMetadata,
}

/// A listing entry — metadata only, no bytes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectInfo {
    pub bucket: String,
    pub key: String,
    pub etag: String,
    pub size: u64,
    pub last_modified: jiff::Timestamp,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BucketOptions {
    #[serde(default)]
    pub versioning: bool,
    #[serde(default)]
    pub encryption: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PutObjectParams {
    pub bucket: String,
    pub key: String,
    pub body: Vec<u8>,
    pub content_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectRef {
    pub bucket: String,
    pub key: String,
}
