use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use cloudweave_contracts::control::SecretsService;
use cloudweave_contracts::data::SecretsClient;
use cloudweave_core::models::secret::{RotationConfig, Secret, SecretValue};
use cloudweave_core::{CloudError, CloudResult};
use cloudweave_reliability::cache::LruTtlCache;

use crate::world::World;

pub struct MockSecrets {
    world: Arc<World>,
    cache: LruTtlCache<SecretValue>,
}

impl MockSecrets {
    pub fn new(world: Arc<World>) -> Self {
        Self {
            world,
            cache: LruTtlCache::default(),
        }
    }
}

#[async_trait]
impl SecretsService for MockSecrets {
    async fn create_secret(&self, name: &str, value: SecretValue) -> CloudResult<Secret> {
        self.world.latency.apply().await;
        let mut secrets = self.world.secrets.lock().await;
        if secrets.contains_key(name) {
            return Err(CloudError::conflict(format!("secret '{name}' already exists")));
        }
        let now = jiff::Timestamp::now();
        let secret = Secret {
            name: name.to_string(),
            version: 1,
            created: now,
            last_modified: now,
            rotation_enabled: false,
            rotation_days: None,
            last_rotated: None,
            tags: HashMap::new(),
        };
        secrets.insert(name.to_string(), secret.clone());
        self.world.secret_values.lock().await.insert(name.to_string(), value);
        Ok(secret)
    }

    async fn get_secret_value(&self, name: &str) -> CloudResult<SecretValue> {
        SecretsClient::get_secret_value(self, name).await
    }

    async fn update_secret(&self, name: &str, value: SecretValue) -> CloudResult<Secret> {
        self.world.latency.apply().await;
        let mut secrets = self.world.secrets.lock().await;
        let secret = secrets
            .get_mut(name)
            .ok_or_else(|| CloudError::not_found("secret", name))?;
        secret.version += 1;
        secret.last_modified = jiff::Timestamp::now();
        self.world.secret_values.lock().await.insert(name.to_string(), value);
        self.cache.invalidate(name).await;
        Ok(secret.clone())
    }

    async fn delete_secret(&self, name: &str, force: bool) -> CloudResult<()> {
        self.world.latency.apply().await;
        if !self.world.secrets.lock().await.contains_key(name) {
            return Err(CloudError::not_found("secret", name));
        }
        self.cache.invalidate(name).await;
        if force {
            self.world.secrets.lock().await.remove(name);
            self.world.secret_values.lock().await.remove(name);
            self.world.secrets_pending_deletion.lock().await.remove(name);
        } else {
            self.world.secrets_pending_deletion.lock().await.insert(name.to_string());
        }
        Ok(())
    }

    async fn list_secrets(&self) -> CloudResult<Vec<Secret>> {
        self.world.latency.apply().await;
        let pending = self.world.secrets_pending_deletion.lock().await;
        Ok(self
            .world
            .secrets
            .lock()
            .await
            .values()
            .filter(|s| !pending.contains(&s.name))
            .cloned()
            .collect())
    }

    async fn rotate_secret(&self, name: &str, config: RotationConfig) -> CloudResult<Secret> {
        self.world.latency.apply().await;
        let mut secrets = self.world.secrets.lock().await;
        let secret = secrets
            .get_mut(name)
            .ok_or_else(|| CloudError::not_found("secret", name))?;
        secret.rotation_enabled = true;
        secret.rotation_days = Some(config.rotation_days);
        secret.last_rotated = Some(jiff::Timestamp::now());
        secret.version += 1;
        self.cache.invalidate(name).await;
        Ok(secret.clone())
    }

    async fn tag_secret(&self, name: &str, tags: HashMap<String, String>) -> CloudResult<Secret> {
        self.world.latency.apply().await;
        let mut secrets = self.world.secrets.lock().await;
        let secret = secrets
            .get_mut(name)
            .ok_or_else(|| CloudError::not_found("secret", name))?;
        secret.tags.extend(tags);
        Ok(secret.clone())
    }
}

#[async_trait]
impl SecretsClient for MockSecrets {
    async fn get_secret_value(&self, name: &str) -> CloudResult<SecretValue> {
        self.world.latency.apply().await;
        if let (true, Some(value)) = self.cache.get(name).await {
            return Ok(value);
        }
        let pending = self.world.secrets_pending_deletion.lock().await;
        if pending.contains(name) {
            return Err(CloudError::not_found("secret", name));
        }
        drop(pending);
        let value = self
            .world
            .secret_values
            .lock()
            .await
            .get(name)
            .cloned()
            .ok_or_else(|| CloudError::not_found("secret", name))?;
        self.cache.put(name.to_string(), value.clone(), None).await;
        Ok(value)
    }

    async fn get_secret_value_version(&self, name: &str, version: u32) -> CloudResult<SecretValue> {
        self.world.latency.apply().await;
        let secrets = self.world.secrets.lock().await;
        let secret = secrets.get(name).ok_or_else(|| CloudError::not_found("secret", name))?;
        if secret.version != version {
            return Err(CloudError::not_found("secret_version", format!("{name}@{version}")));
        }
        drop(secrets);
        self.world
            .secret_values
            .lock()
            .await
            .get(name)
            .cloned()
            .ok_or_else(|| CloudError::not_found("secret", name))
    }
}
