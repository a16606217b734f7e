//! cloudweave-facade
//!
//! The two entry objects consumer code actually constructs: [`ControlFacade`]
//! (infrastructure management, the 14 control-plane contracts) and
//! [`RuntimeFacade`] (application runtime operations, the 11 data-plane
//! contracts), plus the [`ProviderFactory`] wiring that picks a provider from
//! a [`ProviderConfig`] and populates it with that provider's adapters.
//!
//! Consumer code never references a provider SDK type — every accessor here
//! returns a contract trait object, and the only provider-specific code in
//! this crate is [`build_factory`]'s dispatch on [`ProviderKind`].

use std::any::Any;
use std::sync::Arc;

use cloudweave_contracts::control::{
    AuthenticationService, BatchService, CacheService, ConfigurationService, ContainerRepoService,
    DataStoreService, DocumentStoreService, EventBusService, FunctionHostingService,
    NotificationService, ObjectStoreService, QueueService, SecretsService, WebHostingService,
};
use cloudweave_contracts::data::{
    AuthClient, CacheClient, ConfigClient, ContainerRepoClient, DataClient, DocumentClient,
    EventPublisher, NotificationClient, ObjectClient, QueueClient, SecretsClient,
};
use cloudweave_contracts::factory::{ProviderFactory, ServiceId};
use cloudweave_core::models::provider_config::{ProviderConfig, ProviderKind};
use cloudweave_core::{CloudError, CloudResult};

/// Builds a factory for `config.provider` and populates it with that
/// provider's adapters. `Azure`/`Gcp` have no adapter crate in this
/// workspace yet — resolving any service against them fails with
/// `ServiceUnavailableError` rather than panicking at construction time.
pub async fn build_factory(config: ProviderConfig) -> CloudResult<ProviderFactory> {
    let mut factory = ProviderFactory::new(config.clone());
    match config.provider {
        ProviderKind::Mock => {
            cloudweave_mock::register(&mut factory, cloudweave_mock::World::new())?;
        }
        ProviderKind::Aws => {
            cloudweave_aws::register(&mut factory, config).await?;
        }
        ProviderKind::Azure | ProviderKind::Gcp => {
            tracing::warn!(provider = ?config.provider, "no adapter crate registered for this provider yet");
        }
    }
    Ok(factory)
}

/// Resolves `service` against `factory` and flattens the double-`Arc`
/// registration wrapper (the factory's registry stores `Arc<dyn Any>`
/// erasing an already-boxed `Arc<dyn T>`, so `factory.get::<Arc<dyn T>>`
/// itself returns `Arc<Arc<dyn T>>`).
async fn resolve<T: ?Sized + Send + Sync + 'static>(
    factory: &ProviderFactory,
    service: ServiceId,
) -> CloudResult<Arc<T>> {
    let wrapped: Arc<Arc<T>> = factory.get(service).await?;
    Ok((*wrapped).clone())
}

/// Infrastructure management: the 14 control-plane service contracts
/// (spec §4.6), resolved lazily and cached by the underlying factory.
pub struct ControlFacade {
    factory: Arc<ProviderFactory>,
}

impl ControlFacade {
    pub async fn new(config: ProviderConfig) -> CloudResult<Self> {
        Ok(Self {
            factory: Arc::new(build_factory(config).await?),
        })
    }

    pub fn from_factory(factory: Arc<ProviderFactory>) -> Self {
        Self { factory }
    }

    pub async fn web_hosting(&self) -> CloudResult<Arc<dyn WebHostingService>> {
        resolve(&self.factory, ServiceId::WebHosting).await
    }

    pub async fn function_hosting(&self) -> CloudResult<Arc<dyn FunctionHostingService>> {
        resolve(&self.factory, ServiceId::FunctionHosting).await
    }

    pub async fn batch(&self) -> CloudResult<Arc<dyn BatchService>> {
        resolve(&self.factory, ServiceId::Batch).await
    }

    pub async fn queue(&self) -> CloudResult<Arc<dyn QueueService>> {
        resolve(&self.factory, ServiceId::Queue).await
    }

    pub async fn event_bus(&self) -> CloudResult<Arc<dyn EventBusService>> {
        resolve(&self.factory, ServiceId::EventBus).await
    }

    pub async fn secrets(&self) -> CloudResult<Arc<dyn SecretsService>> {
        resolve(&self.factory, ServiceId::Secrets).await
    }

    pub async fn configuration(&self) -> CloudResult<Arc<dyn ConfigurationService>> {
        resolve(&self.factory, ServiceId::Configuration).await
    }

    pub async fn notification(&self) -> CloudResult<Arc<dyn NotificationService>> {
        resolve(&self.factory, ServiceId::Notification).await
    }

    pub async fn document_store(&self) -> CloudResult<Arc<dyn DocumentStoreService>> {
        resolve(&self.factory, ServiceId::DocumentStore).await
    }

    pub async fn data_store(&self) -> CloudResult<Arc<dyn DataStoreService>> {
        resolve(&self.factory, ServiceId::DataStore).await
    }

    pub async fn object_store(&self) -> CloudResult<Arc<dyn ObjectStoreService>> {
        resolve(&self.factory, ServiceId::ObjectStore).await
    }

    pub async fn authentication(&self) -> CloudResult<Arc<dyn AuthenticationService>> {
        resolve(&self.factory, ServiceId::Authentication).await
    }

    pub async fn cache(&self) -> CloudResult<Arc<dyn CacheService>> {
        resolve(&self.factory, ServiceId::Cache).await
    }

    pub async fn container_repo(&self) -> CloudResult<Arc<dyn ContainerRepoService>> {
        resolve(&self.factory, ServiceId::ContainerRepo).await
    }
}

/// Application runtime operations: the 11 data-plane client contracts
/// (spec §4.7), resolved lazily and cached by the underlying factory.
pub struct RuntimeFacade {
    factory: Arc<ProviderFactory>,
}

impl RuntimeFacade {
    pub async fn new(config: ProviderConfig) -> CloudResult<Self> {
        Ok(Self {
            factory: Arc::new(build_factory(config).await?),
        })
    }

    pub fn from_factory(factory: Arc<ProviderFactory>) -> Self {
        Self { factory }
    }

    pub async fn queue(&self) -> CloudResult<Arc<dyn QueueClient>> {
        resolve(&self.factory, ServiceId::QueueClient).await
    }

    pub async fn object(&self) -> CloudResult<Arc<dyn ObjectClient>> {
        resolve(&self.factory, ServiceId::ObjectClient).await
    }

    pub async fn secrets(&self) -> CloudResult<Arc<dyn SecretsClient>> {
        resolve(&self.factory, ServiceId::SecretsClient).await
    }

    pub async fn config(&self) -> CloudResult<Arc<dyn ConfigClient>> {
        resolve(&self.factory, ServiceId::ConfigClient).await
    }

    pub async fn events(&self) -> CloudResult<Arc<dyn EventPublisher>> {
        resolve(&self.factory, ServiceId::EventPublisher).await
    }

    pub async fn notification(&self) -> CloudResult<Arc<dyn NotificationClient>> {
        resolve(&self.factory, ServiceId::NotificationClient).await
    }

    pub async fn documents(&self) -> CloudResult<Arc<dyn DocumentClient>> {
        resolve(&self.factory, ServiceId::DocumentClient).await
    }

    pub async fn data(&self) -> CloudResult<Arc<dyn DataClient>> {
        resolve(&self.factory, ServiceId::DataClient).await
    }

    pub async fn auth(&self) -> CloudResult<Arc<dyn AuthClient>> {
        resolve(&self.factory, ServiceId::AuthClient).await
    }

    pub async fn cache(&self) -> CloudResult<Arc<dyn CacheClient>> {
        resolve(&self.factory, ServiceId::CacheClient).await
    }

    pub async fn container_repo(&self) -> CloudResult<Arc<dyn ContainerRepoClient>> {
        resolve(&self.factory, ServiceId::ContainerRepoClient).await
    }
}

/// Reconfirms that resolving an unregistered provider/service pair fails
/// cleanly instead of panicking — `Azure`/`Gcp` have no adapter crate yet.
#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unregistered_provider_surfaces_service_unavailable() {
        let control = ControlFacade::new(ProviderConfig::new(ProviderKind::Azure))
            .await
            .expect("building the facade itself never fails");
        let err = control.object_store().await.expect_err("azure has no adapter crate");
        assert!(matches!(err.kind, cloudweave_core::ErrorKind::ServiceUnavailable));
    }

    #[tokio::test]
    async fn mock_provider_resolves_every_control_and_runtime_accessor() {
        let factory = Arc::new(
            build_factory(ProviderConfig::new(ProviderKind::Mock))
                .await
                .unwrap(),
        );
        let control = ControlFacade::from_factory(factory.clone());
        let runtime = RuntimeFacade::from_factory(factory);

        assert!(control.object_store().await.is_ok());
        assert!(control.queue().await.is_ok());
        assert!(control.authentication().await.is_ok());
        assert!(runtime.object().await.is_ok());
        assert!(runtime.auth().await.is_ok());
    }
}
