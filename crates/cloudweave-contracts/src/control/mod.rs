//! Control-plane service contracts (spec §4.6) — provisioning, lifecycle
//! and administration. Runtime data access lives in [`crate::data`].

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

pub use authentication::AuthenticationService;
pub use batch::BatchService;
pub use cache::CacheService;
pub use configuration::ConfigurationService;
pub use container_repo::ContainerRepoService;
pub use data_store::DataStoreService;
pub use document_store::DocumentStoreService;
pub use event_bus::EventBusService;
pub use function_hosting::FunctionHostingService;
pub use notification::NotificationService;
pub use object_store::ObjectStoreService;
pub use queue::QueueService;
pub use secrets::SecretsService;
pub use web_hosting::WebHostingService;
