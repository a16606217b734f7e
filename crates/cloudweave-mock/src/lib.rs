//! In-memory provider implementing every cloudweave contract against one
//! shared [`world::World`] (spec §4.8). No call ever reaches the network;
//! every adapter is safe to construct and drop at will, and state lives
//! only as long as the `World` it was built from.

pub mod authentication;
pub mod batch;
pub mod cache;
pub mod configuration;
pub mod container_repo;
pub mod data_store;
pub mod document_store;
pub mod event_bus;
pub mod function_hosting;
pub mod notification;
pub mod object_store;
pub mod queue;
pub mod secrets;
pub mod web_hosting;
pub mod world;

pub use authentication::MockAuthentication;
pub use batch::MockBatch;
pub use cache::MockCache;
pub use configuration::MockConfiguration;
pub use container_repo::MockContainerRepo;
pub use data_store::MockDataStore;
pub use document_store::MockDocumentStore;
pub use event_bus::MockEventBus;
pub use function_hosting::MockFunctionHosting;
pub use notification::MockNotification;
pub use object_store::MockObjectStore;
pub use queue::MockQueue;
pub use secrets::MockSecrets;
pub use web_hosting::MockWebHosting;
pub use world::World;

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
use cloudweave_core::CloudResult;

/// Registers every mock adapter against `factory`, all sharing one
/// [`World`] so writes made through one service contract (e.g.
/// `QueueService::send_message`) are visible through the matching data-plane
/// contract (`QueueClient::receive_messages`) on the same facade.
///
/// Each constructor erases its adapter behind the service's own trait
/// object (`Arc<dyn WebHostingService>`, not `Arc<MockWebHosting>`) before
/// boxing it as `Arc<dyn Any>` — the factory is the only place a concrete
/// adapter type is permitted to leak outside this crate (spec §4.1); callers
/// resolve with `factory.get::<Arc<dyn WebHostingService>>(...)`.
///
/// Fails only if `factory` already has a conflicting registration for a
/// `(Mock, ServiceId)` pair — callers populating a fresh factory never hit
/// this.
pub fn register(factory: &mut ProviderFactory, world: Arc<World>) -> CloudResult<()> {
    macro_rules! register_one {
        ($service:expr, $build:expr) => {{
            let world = world.clone();
            let build = $build;
            factory.register(
                ProviderKind::Mock,
                $service,
                Arc::new(
                    move |_cfg: &ProviderConfig| -> CloudResult<Arc<dyn Any + Send + Sync>> {
                        Ok(build(world.clone()))
                    },
                ),
                false,
            )?;
        }};
    }

    register_one!(ServiceId::WebHosting, |w| {
        let svc: Arc<dyn WebHostingService> = Arc::new(MockWebHosting::new(w));
        Arc::new(svc) as Arc<dyn Any + Send + Sync>
    });
    register_one!(ServiceId::FunctionHosting, |w| {
        let svc: Arc<dyn FunctionHostingService> = Arc::new(MockFunctionHosting::new(w));
        Arc::new(svc) as Arc<dyn Any + Send + Sync>
    });
    register_one!(ServiceId::Batch, |w| {
        let svc: Arc<dyn BatchService> = Arc::new(MockBatch::new(w));
        Arc::new(svc) as Arc<dyn Any + Send + Sync>
    });
    register_one!(ServiceId::Queue, |w| {
        let svc: Arc<dyn QueueService> = Arc::new(MockQueue::new(w));
        Arc::new(svc) as Arc<dyn Any + Send + Sync>
    });
    register_one!(ServiceId::QueueClient, |w| {
        let svc: Arc<dyn QueueClient> = Arc::new(MockQueue::new(w));
        Arc::new(svc) as Arc<dyn Any + Send + Sync>
    });
    register_one!(ServiceId::EventBus, |w| {
        let svc: Arc<dyn EventBusService> = Arc::new(MockEventBus::new(w));
        Arc::new(svc) as Arc<dyn Any + Send + Sync>
    });
    register_one!(ServiceId::EventPublisher, |w| {
        let svc: Arc<dyn EventPublisher> = Arc::new(MockEventBus::new(w));
        Arc::new(svc) as Arc<dyn Any + Send + Sync>
    });
    register_one!(ServiceId::Secrets, |w| {
        let svc: Arc<dyn SecretsService> = Arc::new(MockSecrets::new(w));
        Arc::new(svc) as Arc<dyn Any + Send + Sync>
    });
    register_one!(ServiceId::SecretsClient, |w| {
        let svc: Arc<dyn SecretsClient> = Arc::new(MockSecrets::new(w));
        Arc::new(svc) as Arc<dyn Any + Send + Sync>
    });
    register_one!(ServiceId::Configuration, |w| {
        let svc: Arc<dyn ConfigurationService> = Arc::new(MockConfiguration::new(w));
        Arc::new(svc) as Arc<dyn Any + Send + Sync>
    });
    register_one!(ServiceId::ConfigClient, |w| {
        let svc: Arc<dyn ConfigClient> = Arc::new(MockConfiguration::new(w));
        Arc::new(svc) as Arc<dyn Any + Send + Sync>
    });
    register_one!(ServiceId::Notification, |w| {
        let svc: Arc<dyn NotificationService> = Arc::new(MockNotification::new(w));
        Arc::new(svc) as Arc<dyn Any + Send + Sync>
    });
    register_one!(ServiceId::NotificationClient, |w| {
        let svc: Arc<dyn NotificationClient> = Arc::new(MockNotification::new(w));
        Arc::new(svc) as Arc<dyn Any + Send + Sync>
    });
    register_one!(ServiceId::DocumentStore, |w| {
        let svc: Arc<dyn DocumentStoreService> = Arc::new(MockDocumentStore::new(w));
        Arc::new(svc) as Arc<dyn Any + Send + Sync>
    });
    register_one!(ServiceId::DocumentClient, |w| {
        let svc: Arc<dyn DocumentClient> = Arc::new(MockDocumentStore::new(w));
        Arc::new(svc) as Arc<dyn Any + Send + Sync>
    });
    register_one!(ServiceId::DataStore, |w| {
        let svc: Arc<dyn DataStoreService> = Arc::new(MockDataStore::new(w));
        Arc::new(svc) as Arc<dyn Any + Send + Sync>
    });
    register_one!(ServiceId::DataClient, |w| {
        let svc: Arc<dyn DataClient> = Arc::new(MockDataStore::new(w));
        Arc::new(svc) as Arc<dyn Any + Send + Sync>
    });
    register_one!(ServiceId::ObjectStore, |w| {
        let svc: Arc<dyn ObjectStoreService> = Arc::new(MockObjectStore::new(w));
        Arc::new(svc) as Arc<dyn Any + Send + Sync>
    });
    register_one!(ServiceId::ObjectClient, |w| {
        let svc: Arc<dyn ObjectClient> = Arc::new(MockObjectStore::new(w));
        Arc::new(svc) as Arc<dyn Any + Send + Sync>
    });
    register_one!(ServiceId::Authentication, |w| {
        let svc: Arc<dyn AuthenticationService> = Arc::new(MockAuthentication::new(w));
        Arc::new(svc) as Arc<dyn Any + Send + Sync>
    });
    register_one!(ServiceId::AuthClient, |w| {
        let svc: Arc<dyn AuthClient> = Arc::new(MockAuthentication::new(w));
        Arc::new(svc) as Arc<dyn Any + Send + Sync>
    });
    register_one!(ServiceId::Cache, |w| {
        let svc: Arc<dyn CacheService> = Arc::new(MockCache::new(w));
        Arc::new(svc) as Arc<dyn Any + Send + Sync>
    });
    register_one!(ServiceId::CacheClient, |w| {
        let svc: Arc<dyn CacheClient> = Arc::new(MockCache::new(w));
        Arc::new(svc) as Arc<dyn Any + Send + Sync>
    });
    register_one!(ServiceId::ContainerRepo, |w| {
        let svc: Arc<dyn ContainerRepoService> = Arc::new(MockContainerRepo::new(w));
        Arc::new(svc) as Arc<dyn Any + Send + Sync>
    });
    register_one!(ServiceId::ContainerRepoClient, |w| {
        let svc: Arc<dyn ContainerRepoClient> = Arc::new(MockContainerRepo::new(w));
        Arc::new(svc) as Arc<dyn Any + Send + Sync>
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn registers_every_service_id_against_one_shared_world() {
        use cloudweave_core::models::queue::QueueOptions;

        let mut factory = ProviderFactory::new(ProviderConfig::new(ProviderKind::Mock));
        register(&mut factory, World::new()).expect("fresh factory accepts every registration");

        let queue: Arc<Arc<dyn QueueService>> = factory
            .get(ServiceId::Queue)
            .await
            .expect("queue adapter resolves");
        let queue_client: Arc<Arc<dyn QueueClient>> = factory
            .get(ServiceId::QueueClient)
            .await
            .expect("queue client adapter resolves");

        queue
            .create_queue("orders", QueueOptions::default())
            .await
            .expect("queue created through the control-plane adapter");
        let retrieved = queue_client
            .get_queue("orders")
            .await
            .expect("queue visible through the data-plane adapter sharing the same world");
        assert_eq!(retrieved.name, "orders");
    }
}
