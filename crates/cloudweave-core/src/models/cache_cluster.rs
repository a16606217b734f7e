use serde::{Deserialize, Serialize};

/// A distributed cache cluster (control plane) — not to be confused with
/// the library's own reliability-layer LRU cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheCluster {
    pub name: String,
    pub endpoint: String,
    pub node_type: String,
    pub num_nodes: u32,
    pub auth_token_enabled: bool,
    pub transit_encryption_enabled: bool,
    pub created: jiff::Timestamp,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCacheClusterParams {
    pub name: String,
    pub node_type: String,
    pub num_nodes: u32,
    #[serde(default)]
    pub auth_token: Option<String>,
    #[serde(default)]
    pub transit_encryption_enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheSecurityConfig {
    pub auth_token: Option<String>,
    pub transit_encryption_enabled: bool,
}
