use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use cloudweave_contracts::control::CacheService;
use cloudweave_contracts::data::CacheClient;
use cloudweave_core::models::cache_cluster::{CacheCluster, CacheSecurityConfig, CreateCacheClusterParams};
use cloudweave_core::{CloudError, CloudResult};

use crate::world::{CacheEntry, World};

pub struct MockCache {
    world: Arc<World>,
}

impl MockCache {
    pub fn new(world: Arc<World>) -> Self {
        Self { world }
    }

    fn live(entry: &CacheEntry) -> bool {
        entry.expires_at.map(|at| at > Instant::now()).unwrap_or(true)
    }
}

#[async_trait]
impl CacheService for MockCache {
    async fn create_cluster(&self, params: CreateCacheClusterParams) -> CloudResult<CacheCluster> {
        self.world.latency.apply().await;
        let mut clusters = self.world.cache_clusters.lock().await;
        if clusters.contains_key(&params.name) {
            return Err(CloudError::conflict(format!("cache cluster '{}' already exists", params.name)));
        }
        let cluster = CacheCluster {
            name: params.name.clone(),
            endpoint: format!("mock://cache/{}", params.name),
            node_type: params.node_type,
            num_nodes: params.num_nodes,
            auth_token_enabled: params.auth_token.is_some(),
            transit_encryption_enabled: params.transit_encryption_enabled,
            created: jiff::Timestamp::now(),
        };
        clusters.insert(params.name, cluster.clone());
        Ok(cluster)
    }

    async fn get_cluster(&self, name: &str) -> CloudResult<CacheCluster> {
        self.world.latency.apply().await;
        self.world
            .cache_clusters
            .lock()
            .await
            .get(name)
            .cloned()
            .ok_or_else(|| CloudError::not_found("cache_cluster", name))
    }

    async fn delete_cluster(&self, name: &str) -> CloudResult<()> {
        self.world.latency.apply().await;
        if self.world.cache_clusters.lock().await.remove(name).is_none() {
            return Err(CloudError::not_found("cache_cluster", name));
        }
        self.world
            .cache_kv
            .lock()
            .await
            .retain(|(cluster, _), _| cluster != name);
        Ok(())
    }

    async fn list_clusters(&self) -> CloudResult<Vec<CacheCluster>> {
        self.world.latency.apply().await;
        Ok(self.world.cache_clusters.lock().await.values().cloned().collect())
    }

    async fn update_security_config(
        &self,
        name: &str,
        config: CacheSecurityConfig,
    ) -> CloudResult<CacheCluster> {
        self.world.latency.apply().await;
        let mut clusters = self.world.cache_clusters.lock().await;
        let cluster = clusters.get_mut(name).ok_or_else(|| CloudError::not_found("cache_cluster", name))?;
        cluster.auth_token_enabled = config.auth_token.is_some();
        cluster.transit_encryption_enabled = config.transit_encryption_enabled;
        Ok(cluster.clone())
    }

    async fn flush_cluster(&self, name: &str) -> CloudResult<()> {
        self.world.latency.apply().await;
        if !self.world.cache_clusters.lock().await.contains_key(name) {
            return Err(CloudError::not_found("cache_cluster", name));
        }
        self.world
            .cache_kv
            .lock()
            .await
            .retain(|(cluster, _), _| cluster != name);
        Ok(())
    }
}

#[async_trait]
impl CacheClient for MockCache {
    async fn get(&self, cluster: &str, key: &str) -> CloudResult<Option<String>> {
        self.world.latency.apply().await;
        let kv = self.world.cache_kv.lock().await;
        Ok(kv
            .get(&(cluster.to_string(), key.to_string()))
            .filter(|entry| Self::live(entry))
            .map(|entry| entry.value.clone()))
    }

    async fn set(
        &self,
        cluster: &str,
        key: &str,
        value: &str,
        ttl_seconds: Option<u64>,
    ) -> CloudResult<()> {
        self.world.latency.apply().await;
        self.world.cache_kv.lock().await.insert(
            (cluster.to_string(), key.to_string()),
            CacheEntry {
                value: value.to_string(),
                expires_at: ttl_seconds.map(|s| Instant::now() + Duration::from_secs(s)),
            },
        );
        Ok(())
    }

    async fn delete(&self, cluster: &str, key: &str) -> CloudResult<()> {
        self.world.latency.apply().await;
        self.world
            .cache_kv
            .lock()
            .await
            .remove(&(cluster.to_string(), key.to_string()));
        Ok(())
    }

    async fn increment(&self, cluster: &str, key: &str, by: i64) -> CloudResult<i64> {
        self.world.latency.apply().await;
        let mut kv = self.world.cache_kv.lock().await;
        let entry = kv
            .entry((cluster.to_string(), key.to_string()))
            .or_insert_with(|| CacheEntry { value: "0".to_string(), expires_at: None });
        let current: i64 = entry
            .value
            .parse()
            .map_err(|_| CloudError::validation(format!("value at '{key}' is not numeric")))?;
        let updated = current + by;
        entry.value = updated.to_string();
        Ok(updated)
    }

    async fn mget(&self, cluster: &str, keys: &[String]) -> CloudResult<Vec<Option<String>>> {
        self.world.latency.apply().await;
        let kv = self.world.cache_kv.lock().await;
        Ok(keys
            .iter()
            .map(|key| {
                kv.get(&(cluster.to_string(), key.clone()))
                    .filter(|entry| Self::live(entry))
                    .map(|entry| entry.value.clone())
            })
            .collect())
    }

    async fn mset(&self, cluster: &str, entries: &[(String, String)]) -> CloudResult<()> {
        self.world.latency.apply().await;
        let mut kv = self.world.cache_kv.lock().await;
        for (key, value) in entries {
            kv.insert(
                (cluster.to_string(), key.clone()),
                CacheEntry { value: value.clone(), expires_at: None },
            );
        }
        Ok(())
    }

    async fn expire(&self, cluster: &str, key: &str, ttl_seconds: u64) -> CloudResult<()> {
        self.world.latency.apply().await;
        let mut kv = self.world.cache_kv.lock().await;
        let entry = kv
            .get_mut(&(cluster.to_string(), key.to_string()))
            .ok_or_else(|| CloudError::not_found("cache_key", key))?;
        entry.expires_at = Some(Instant::now() + Duration::from_secs(ttl_seconds));
        Ok(())
    }

    async fn ttl(&self, cluster: &str, key: &str) -> CloudResult<Option<u64>> {
        self.world.latency.apply().await;
        let kv = self.world.cache_kv.lock().await;
        let entry = kv
            .get(&(cluster.to_string(), key.to_string()))
            .ok_or_else(|| CloudError::not_found("cache_key", key))?;
        Ok(entry
            .expires_at
            .map(|at| at.saturating_duration_since(Instant::now()).as_secs()))
    }
}
