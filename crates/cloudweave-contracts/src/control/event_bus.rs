use async_trait::async_trait;
use cloudweave_core::models::event_bus::{Event, EventBus, EventPattern, Rule, Target};
use cloudweave_core::CloudResult;

/// Event bus and rule management (spec §4.6). `publishEvent` is control-plane
/// here because delivery is fire-and-forget against matching rules, not a
/// request/response data-plane call.
#[async_trait]
pub trait EventBusService: Send + Sync {
    async fn create_event_bus(&self, name: &str) -> CloudResult<EventBus>;
    async fn delete_event_bus(&self, name: &str) -> CloudResult<()>;
    async fn list_event_buses(&self) -> CloudResult<Vec<EventBus>>;

    async fn put_rule(
        &self,
        bus_name: &str,
        rule_name: &str,
        pattern: EventPattern,
    ) -> CloudResult<Rule>;
    async fn delete_rule(&self, bus_name: &str, rule_name: &str) -> CloudResult<()>;
    async fn list_rules(&self, bus_name: &str) -> CloudResult<Vec<Rule>>;

    async fn put_targets(
        &self,
        bus_name: &str,
        rule_name: &str,
        targets: Vec<Target>,
    ) -> CloudResult<()>;
    async fn remove_targets(
        &self,
        bus_name: &str,
        rule_name: &str,
        target_ids: Vec<String>,
    ) -> CloudResult<()>;

    /// Evaluates every rule on `bus_name` against `event.detail` and
    /// dispatches to each matching rule's targets. Returns an opaque id for
    /// the published event.
    async fn publish_event(&self, bus_name: &str, event: Event) -> CloudResult<String>;
}
