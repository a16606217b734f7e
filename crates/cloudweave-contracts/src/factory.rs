//! Provider factory and dependency-injection core (spec §4.1).
//!
//! One registry keyed by `(provider, service)` rather than one factory per
//! provider, since this library has 25 distinct service contracts rather
//! than one shared resource trait.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use cloudweave_core::models::provider_config::{ProviderConfig, ProviderKind};
use cloudweave_core::{CloudError, CloudResult};
use tokio::sync::Mutex;

/// Identifies one of the 25 service/client contracts a factory can
/// construct an adapter for (spec §4.6, §4.7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceId {
    WebHosting,
    FunctionHosting,
    Batch,
    Queue,
    EventBus,
    Secrets,
    Configuration,
    Notification,
    DocumentStore,
    DataStore,
    ObjectStore,
    Authentication,
    Cache,
    ContainerRepo,
    QueueClient,
    ObjectClient,
    SecretsClient,
    ConfigClient,
    EventPublisher,
    NotificationClient,
    DocumentClient,
    DataClient,
    AuthClient,
    CacheClient,
    ContainerRepoClient,
}

/// Constructs a boxed adapter for one `(provider, service)` pair. Returns
/// `Arc<dyn Any>` because the registry is type-erased; [`ProviderFactory::get`]
/// downcasts back to the concrete trait object the caller asked for.
pub type ServiceConstructor =
    Arc<dyn Fn(&ProviderConfig) -> CloudResult<Arc<dyn Any + Send + Sync>> + Send + Sync>;

/// Given a `ProviderConfig` and a [`ServiceId`], returns an adapter
/// satisfying the corresponding service contract — the single place where
/// provider-specific types are permitted (spec §4.1).
///
/// `get` constructs an adapter the first time it's asked for a given
/// `ServiceId` and caches it for the life of the factory; `register` is
/// the extension point concrete provider crates (`cloudweave-mock`,
/// `cloudweave-aws`) use to populate the registry.
pub struct ProviderFactory {
    config: ProviderConfig,
    registry: HashMap<(ProviderKind, ServiceId), ServiceConstructor>,
    cache: Mutex<HashMap<ServiceId, Arc<dyn Any + Send + Sync>>>,
}

impl ProviderFactory {
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            config,
            registry: HashMap::new(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Registers a constructor for `(provider, service)`. Fails unless
    /// `override_existing` when the pair is already registered.
    pub fn register(
        &mut self,
        provider: ProviderKind,
        service: ServiceId,
        constructor: ServiceConstructor,
        override_existing: bool,
    ) -> CloudResult<()> {
        let key = (provider, service);
        if self.registry.contains_key(&key) && !override_existing {
            return Err(CloudError::conflict(format!(
                "a constructor for {service:?} is already registered under {provider:?}"
            )));
        }
        self.registry.insert(key, constructor);
        Ok(())
    }

    /// The set of providers with at least one registered constructor.
    pub fn providers(&self) -> Vec<ProviderKind> {
        let mut seen = Vec::new();
        for (provider, _) in self.registry.keys() {
            if !seen.contains(provider) {
                seen.push(*provider);
            }
        }
        seen
    }

    /// Returns the adapter for `service`, constructing and caching it on
    /// first use. `T` must match the concrete type the registered
    /// constructor produces — a mismatch is a programmer error, reported
    /// as `ServiceUnavailableError` rather than panicking.
    pub async fn get<T: Send + Sync + 'static>(&self, service: ServiceId) -> CloudResult<Arc<T>> {
        {
            let cache = self.cache.lock().await;
            if let Some(existing) = cache.get(&service) {
                return downcast(existing.clone(), service);
            }
        }

        let key = (self.config.provider, service);
        let constructor = self.registry.get(&key).ok_or_else(|| {
            CloudError::service_unavailable(format!(
                "no adapter registered for {service:?} under provider {:?}",
                self.config.provider
            ))
        })?;

        let built = constructor(&self.config).map_err(|e| {
            CloudError::service_unavailable(format!("failed constructing {service:?} adapter"))
                .with_cause(e)
        })?;

        let mut cache = self.cache.lock().await;
        let entry = cache.entry(service).or_insert(built);
        downcast(entry.clone(), service)
    }
}

fn downcast<T: Send + Sync + 'static>(
    erased: Arc<dyn Any + Send + Sync>,
    service: ServiceId,
) -> CloudResult<Arc<T>> {
    erased.downcast::<T>().map_err(|_| {
        CloudError::service_unavailable(format!(
            "registered constructor for {service:?} produced the wrong adapter type"
        ))
    })
}
