use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Secret {
    pub name: String,
    pub version: u32,
    pub created: jiff::Timestamp,
    pub last_modified: jiff::Timestamp,
    pub rotation_enabled: bool,
    pub rotation_days: Option<u32>,
    pub last_rotated: Option<jiff::Timestamp>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

/// A secret's payload — either an opaque string or structured JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SecretValue {
    Text(String),
    Json(serde_json::Value),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotationConfig {
    pub rotation_days: u32,
}
