use std::sync::Arc;

use async_trait::async_trait;
use cloudweave_contracts::control::ConfigurationService;
use cloudweave_contracts::data::ConfigClient;
use cloudweave_core::models::configuration::{Configuration, ConfigurationProfile};
use cloudweave_core::{CloudError, CloudResult};
use cloudweave_reliability::cache::LruTtlCache;
use cloudweave_reliability::validator::{SchemaValidator, ValidationOutcome};

use crate::world::World;

pub struct MockConfiguration {
    world: Arc<World>,
    cache: LruTtlCache<serde_json::Value>,
}

impl MockConfiguration {
    pub fn new(world: Arc<World>) -> Self {
        Self {
            world,
            cache: LruTtlCache::default(),
        }
    }

    fn cache_key(application: &str, environment: &str) -> String {
        format!("{application}/{environment}")
    }
}

#[async_trait]
impl ConfigurationService for MockConfiguration {
    async fn validate_configuration(
        &self,
        content: &serde_json::Value,
        schema: &serde_json::Value,
    ) -> CloudResult<ValidationOutcome> {
        let validator = SchemaValidator::compile(schema)
            .map_err(|e| CloudError::validation(format!("invalid schema: {e}")))?;
        Ok(validator.validate(content))
    }

    async fn create_configuration(
        &self,
        application: &str,
        environment: &str,
        data: serde_json::Value,
        description: Option<String>,
    ) -> CloudResult<Configuration> {
        self.world.latency.apply().await;
        let mut profiles = self.world.config_profiles.lock().await;
        let key = (application.to_string(), environment.to_string());
        let profile = profiles.entry(key).or_insert_with(|| ConfigurationProfile {
            application: application.to_string(),
            environment: environment.to_string(),
            versions: vec![],
            deployed_version: None,
        });
        let version = profile.next_version();
        let configuration = Configuration {
            application: application.to_string(),
            environment: environment.to_string(),
            version,
            data,
            created: jiff::Timestamp::now(),
            deployed: false,
            description,
        };
        profile.versions.push(configuration.clone());
        Ok(configuration)
    }

    async fn get_configuration(
        &self,
        application: &str,
        environment: &str,
        version: Option<u32>,
    ) -> CloudResult<Configuration> {
        self.world.latency.apply().await;
        let profiles = self.world.config_profiles.lock().await;
        let key = (application.to_string(), environment.to_string());
        let profile = profiles
            .get(&key)
            .ok_or_else(|| CloudError::not_found("configuration_profile", format!("{application}/{environment}")))?;

        match version {
            Some(v) => profile
                .versions
                .iter()
                .find(|c| c.version == v)
                .cloned()
                .ok_or_else(|| CloudError::not_found("configuration", format!("{application}/{environment}@{v}"))),
            None => profile
                .deployed()
                .cloned()
                .or_else(|| profile.versions.last().cloned())
                .ok_or_else(|| CloudError::not_found("configuration", format!("{application}/{environment}"))),
        }
    }

    async fn deploy_configuration(
        &self,
        application: &str,
        environment: &str,
        version: u32,
    ) -> CloudResult<Configuration> {
        self.world.latency.apply().await;
        let mut profiles = self.world.config_profiles.lock().await;
        let key = (application.to_string(), environment.to_string());
        let profile = profiles
            .get_mut(&key)
            .ok_or_else(|| CloudError::not_found("configuration_profile", format!("{application}/{environment}")))?;

        if !profile.versions.iter().any(|c| c.version == version) {
            return Err(CloudError::not_found("configuration", format!("{application}/{environment}@{version}")));
        }
        for configuration in &mut profile.versions {
            configuration.deployed = configuration.version == version;
        }
        profile.deployed_version = Some(version);
        self.cache.invalidate(&Self::cache_key(application, environment)).await;

        profile
            .versions
            .iter()
            .find(|c| c.version == version)
            .cloned()
            .ok_or_else(|| CloudError::not_found("configuration", format!("{application}/{environment}@{version}")))
    }

    async fn list_configuration_versions(
        &self,
        application: &str,
        environment: &str,
    ) -> CloudResult<ConfigurationProfile> {
        self.world.latency.apply().await;
        let key = (application.to_string(), environment.to_string());
        self.world
            .config_profiles
            .lock()
            .await
            .get(&key)
            .cloned()
            .ok_or_else(|| CloudError::not_found("configuration_profile", format!("{application}/{environment}")))
    }

    async fn delete_configuration(&self, application: &str, environment: &str) -> CloudResult<()> {
        self.world.latency.apply().await;
        let key = (application.to_string(), environment.to_string());
        self.cache.invalidate(&Self::cache_key(application, environment)).await;
        self.world
            .config_profiles
            .lock()
            .await
            .remove(&key)
            .map(|_| ())
            .ok_or_else(|| CloudError::not_found("configuration_profile", format!("{application}/{environment}")))
    }
}

#[async_trait]
impl ConfigClient for MockConfiguration {
    async fn get_active_configuration(
        &self,
        application: &str,
        environment: &str,
    ) -> CloudResult<serde_json::Value> {
        self.world.latency.apply().await;
        let key = Self::cache_key(application, environment);
        if let (true, Some(data)) = self.cache.get(&key).await {
            return Ok(data);
        }
        let configuration = self.get_configuration(application, environment, None).await?;
        self.cache.put(key, configuration.data.clone(), None).await;
        Ok(configuration.data)
    }
}
