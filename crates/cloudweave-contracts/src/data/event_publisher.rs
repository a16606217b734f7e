use async_trait::async_trait;
use cloudweave_core::models::event_bus::Event;
use cloudweave_core::CloudResult;

/// Runtime event emission against an already-provisioned bus (spec §4.7).
/// Equivalent to [`crate::control::EventBusService::publish_event`], kept
/// as a narrower data-plane surface for callers that only need to publish.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, bus_name: &str, event: Event) -> CloudResult<()>;
    /// Publishes every event; a per-event failure does not stop the rest —
    /// callers inspect the returned per-index results.
    async fn publish_batch(&self, bus_name: &str, events: Vec<Event>) -> CloudResult<Vec<CloudResult<()>>>;
}
