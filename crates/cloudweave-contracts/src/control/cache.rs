use async_trait::async_trait;
use cloudweave_core::models::cache_cluster::{CacheCluster, CacheSecurityConfig, CreateCacheClusterParams};
use cloudweave_core::CloudResult;

/// Distributed cache cluster provisioning (spec §4.6). This is the control
/// plane for a managed cache *cluster*, distinct from the library's own
/// in-process [`cloudweave_reliability::cache::LruTtlCache`].
#[async_trait]
pub trait CacheService: Send + Sync {
    async fn create_cluster(&self, params: CreateCacheClusterParams) -> CloudResult<CacheCluster>;
    async fn get_cluster(&self, name: &str) -> CloudResult<CacheCluster>;
    async fn delete_cluster(&self, name: &str) -> CloudResult<()>;
    async fn list_clusters(&self) -> CloudResult<Vec<CacheCluster>>;
    async fn update_security_config(
        &self,
        name: &str,
        config: CacheSecurityConfig,
    ) -> CloudResult<CacheCluster>;
    async fn flush_cluster(&self, name: &str) -> CloudResult<()>;
}
