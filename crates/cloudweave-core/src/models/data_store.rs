use serde::{Deserialize, Serialize};

/// A single result row from `query`/`queryItems` — column name to value.
pub type Row = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecuteResult {
    pub rows_affected: u64,
    pub insert_id: Option<String>,
}

/// One ordered migration step, applied at most once (tracked by `version`
/// in the provider's own `migrations` table).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Migration {
    pub version: u32,
    pub name: String,
    pub sql: String,
}

/// A scoped connection handle; the caller releases it back to the pool by
/// dropping the handle (or calling `release` explicitly).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionHandle {
    pub id: String,
}
