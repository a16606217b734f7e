use async_trait::async_trait;
use cloudweave_core::CloudResult;

/// Runtime key/value access against a provisioned cache cluster
/// (spec §4.7). `ttl_seconds: None` means no expiry.
#[async_trait]
pub trait CacheClient: Send + Sync {
    async fn get(&self, cluster: &str, key: &str) -> CloudResult<Option<String>>;
    async fn set(
        &self,
        cluster: &str,
        key: &str,
        value: &str,
        ttl_seconds: Option<u64>,
    ) -> CloudResult<()>;
    async fn delete(&self, cluster: &str, key: &str) -> CloudResult<()>;
    async fn increment(&self, cluster: &str, key: &str, by: i64) -> CloudResult<i64>;
    async fn mget(&self, cluster: &str, keys: &[String]) -> CloudResult<Vec<Option<String>>>;
    async fn mset(&self, cluster: &str, entries: &[(String, String)]) -> CloudResult<()>;
    async fn expire(&self, cluster: &str, key: &str, ttl_seconds: u64) -> CloudResult<()>;
    async fn ttl(&self, cluster: &str, key: &str) -> CloudResult<Option<u64>>;
}
