use std::sync::Arc;

use async_trait::async_trait;
use cloudweave_contracts::control::EventBusService;
use cloudweave_contracts::data::EventPublisher;
use cloudweave_core::models::event_bus::{Event, EventBus, EventPattern, Rule, Target};
use cloudweave_core::{CloudError, CloudResult};
use tracing::debug;

use crate::world::World;

pub struct MockEventBus {
    world: Arc<World>,
}

impl MockEventBus {
    pub fn new(world: Arc<World>) -> Self {
        Self { world }
    }

    async fn dispatch(&self, bus_name: &str, event: &Event) -> CloudResult<String> {
        let buses = self.world.event_buses.lock().await;
        let bus = buses
            .get(bus_name)
            .ok_or_else(|| CloudError::not_found("event_bus", bus_name))?;
        let mut matched_targets = Vec::new();
        for rule in &bus.rules {
            if rule.enabled && rule.event_pattern.matches(event) {
                for target in &rule.targets {
                    debug!(bus = bus_name, rule = rule.name, target = target.id, "event dispatched");
                    matched_targets.push(target.id.clone());
                }
            }
        }
        drop(buses);
        let id = self.world.ids.next("event").await;
        if !matched_targets.is_empty() {
            let mut deliveries = self.world.event_deliveries.lock().await;
            for target_id in matched_targets {
                deliveries.entry(target_id).or_default().push(event.clone());
            }
        }
        Ok(id)
    }
}

#[async_trait]
impl EventBusService for MockEventBus {
    async fn create_event_bus(&self, name: &str) -> CloudResult<EventBus> {
        self.world.latency.apply().await;
        let mut buses = self.world.event_buses.lock().await;
        if buses.contains_key(name) {
            return Err(CloudError::conflict(format!("event bus '{name}' already exists")));
        }
        let bus = EventBus {
            name: name.to_string(),
            rules: vec![],
            created: jiff::Timestamp::now(),
        };
        buses.insert(name.to_string(), bus.clone());
        Ok(bus)
    }

    async fn delete_event_bus(&self, name: &str) -> CloudResult<()> {
        self.world.latency.apply().await;
        self.world
            .event_buses
            .lock()
            .await
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| CloudError::not_found("event_bus", name))
    }

    async fn list_event_buses(&self) -> CloudResult<Vec<EventBus>> {
        self.world.latency.apply().await;
        Ok(self.world.event_buses.lock().await.values().cloned().collect())
    }

    async fn put_rule(
        &self,
        bus_name: &str,
        rule_name: &str,
        pattern: EventPattern,
    ) -> CloudResult<Rule> {
        self.world.latency.apply().await;
        let mut buses = self.world.event_buses.lock().await;
        let bus = buses
            .get_mut(bus_name)
            .ok_or_else(|| CloudError::not_found("event_bus", bus_name))?;
        let rule = Rule {
            name: rule_name.to_string(),
            event_pattern: pattern,
            targets: vec![],
            enabled: true,
        };
        bus.rules.retain(|r| r.name != rule_name);
        bus.rules.push(rule.clone());
        Ok(rule)
    }

    async fn delete_rule(&self, bus_name: &str, rule_name: &str) -> CloudResult<()> {
        self.world.latency.apply().await;
        let mut buses = self.world.event_buses.lock().await;
        let bus = buses
            .get_mut(bus_name)
            .ok_or_else(|| CloudError::not_found("event_bus", bus_name))?;
        let before = bus.rules.len();
        bus.rules.retain(|r| r.name != rule_name);
        if bus.rules.len() == before {
            return Err(CloudError::not_found("rule", rule_name));
        }
        Ok(())
    }

    async fn list_rules(&self, bus_name: &str) -> CloudResult<Vec<Rule>> {
        self.world.latency.apply().await;
        Ok(self
            .world
            .event_buses
            .lock()
            .await
            .get(bus_name)
            .ok_or_else(|| CloudError::not_found("event_bus", bus_name))?
            .rules
            .clone())
    }

    async fn put_targets(
        &self,
        bus_name: &str,
        rule_name: &str,
        targets: Vec<Target>,
    ) -> CloudResult<()> {
        self.world.latency.apply().await;
        let mut buses = self.world.event_buses.lock().await;
        let bus = buses
            .get_mut(bus_name)
            .ok_or_else(|| CloudError::not_found("event_bus", bus_name))?;
        let rule = bus
            .rules
            .iter_mut()
            .find(|r| r.name == rule_name)
            .ok_or_else(|| CloudError::not_found("rule", rule_name))?;
        for target in targets {
            rule.targets.retain(|t| t.id != target.id);
            rule.targets.push(target);
        }
        Ok(())
    }

    async fn remove_targets(
        &self,
        bus_name: &str,
        rule_name: &str,
        target_ids: Vec<String>,
    ) -> CloudResult<()> {
        self.world.latency.apply().await;
        let mut buses = self.world.event_buses.lock().await;
        let bus = buses
            .get_mut(bus_name)
            .ok_or_else(|| CloudError::not_found("event_bus", bus_name))?;
        let rule = bus
            .rules
            .iter_mut()
            .find(|r| r.name == rule_name)
            .ok_or_else(|| CloudError::not_found("rule", rule_name))?;
        rule.targets.retain(|t| !target_ids.contains(&t.id));
        Ok(())
    }

    async fn publish_event(&self, bus_name: &str, event: Event) -> CloudResult<String> {
        self.world.latency.apply().await;
        self.dispatch(bus_name, &event).await
    }
}

#[async_trait]
impl EventPublisher for MockEventBus {
    async fn publish(&self, bus_name: &str, event: Event) -> CloudResult<()> {
        EventBusService::publish_event(self, bus_name, event).await.map(|_| ())
    }

    async fn publish_batch(
        &self,
        bus_name: &str,
        events: Vec<Event>,
    ) -> CloudResult<Vec<CloudResult<()>>> {
        self.world.latency.apply().await;
        let mut results = Vec::with_capacity(events.len());
        for event in events {
            results.push(self.dispatch(bus_name, &event).await.map(|_| ()));
        }
        Ok(results)
    }
}
