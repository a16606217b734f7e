//! EventBridge-backed [`EventBusService`]/[`EventPublisher`] adapter.
//! `EventPattern` is translated into EventBridge's own
//! `{"source": [...], "detail-type": [...], "detail": {...}}` pattern JSON.

use async_trait::async_trait;
use aws_sdk_eventbridge::types::{PutEventsRequestEntry, Target as SdkTarget};
use cloudweave_contracts::control::EventBusService;
use cloudweave_contracts::data::EventPublisher;
use cloudweave_core::models::event_bus::{Event, EventBus, EventPattern, Rule, Target};
use cloudweave_core::{CloudError, CloudResult};

pub struct AwsEventBus {
    client: aws_sdk_eventbridge::Client,
}

impl AwsEventBus {
    pub fn new(client: aws_sdk_eventbridge::Client) -> Self {
        Self { client }
    }

    fn pattern_to_json(pattern: &EventPattern) -> String {
        let mut object = serde_json::Map::new();
        if !pattern.source.is_empty() {
            object.insert("source".to_string(), serde_json::json!(pattern.source));
        }
        if !pattern.type_.is_empty() {
            object.insert("detail-type".to_string(), serde_json::json!(pattern.type_));
        }
        if let Some(data) = &pattern.data {
            object.insert("detail".to_string(), serde_json::json!(data));
        }
        serde_json::Value::Object(object).to_string()
    }

    fn pattern_from_json(raw: &str) -> EventPattern {
        let value: serde_json::Value = serde_json::from_str(raw).unwrap_or_default();
        EventPattern {
            source: value
                .get("source")
                .and_then(|v| v.as_array())
                .map(|arr| arr.iter().filter_map(|v| v.as_str().map(str::to_string)).collect())
                .unwrap_or_default(),
            type_: value
                .get("detail-type")
                .and_then(|v| v.as_array())
                .map(|arr| arr.iter().filter_map(|v| v.as_str().map(str::to_string)).collect())
                .unwrap_or_default(),
            data: value.get("detail").and_then(|v| v.as_object()).map(|obj| {
                obj.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
            }),
        }
    }

    async fn targets_for(&self, bus_name: &str, rule_name: &str) -> CloudResult<Vec<Target>> {
        let output = self
            .client
            .list_targets_by_rule()
            .rule(rule_name)
            .event_bus_name(bus_name)
            .send()
            .await
            .map_err(|e| CloudError::service_unavailable(e.into_service_error().to_string()))?;
        Ok(output
            .targets()
            .iter()
            .map(|t| Target {
                id: t.id().to_string(),
                arn: t.arn().to_string(),
            })
            .collect())
    }
}

#[async_trait]
impl EventBusService for AwsEventBus {
    async fn create_event_bus(&self, name: &str) -> CloudResult<EventBus> {
        self.client
            .create_event_bus()
            .name(name)
            .send()
            .await
            .map_err(|e| CloudError::conflict(e.into_service_error().to_string()))?;
        Ok(EventBus {
            name: name.to_string(),
            rules: Vec::new(),
            created: jiff::Timestamp::now(),
        })
    }

    async fn delete_event_bus(&self, name: &str) -> CloudResult<()> {
        self.client
            .delete_event_bus()
            .name(name)
            .send()
            .await
            .map(|_| ())
            .map_err(|e| CloudError::service_unavailable(e.into_service_error().to_string()))
    }

    async fn list_event_buses(&self) -> CloudResult<Vec<EventBus>> {
        let output = self
            .client
            .list_event_buses()
            .send()
            .await
            .map_err(|e| CloudError::service_unavailable(e.into_service_error().to_string()))?;
        let mut buses = Vec::new();
        for bus in output.event_buses() {
            let name = bus.name().unwrap_or_default();
            let rules = self.list_rules(name).await?;
            buses.push(EventBus {
                name: name.to_string(),
                rules,
                created: jiff::Timestamp::now(),
            });
        }
        Ok(buses)
    }

    async fn put_rule(&self, bus_name: &str, rule_name: &str, pattern: EventPattern) -> CloudResult<Rule> {
        self.client
            .put_rule()
            .name(rule_name)
            .event_bus_name(bus_name)
            .event_pattern(Self::pattern_to_json(&pattern))
            .send()
            .await
            .map_err(|e| CloudError::service_unavailable(e.into_service_error().to_string()))?;
        Ok(Rule {
            name: rule_name.to_string(),
            event_pattern: pattern,
            targets: Vec::new(),
            enabled: true,
        })
    }

    async fn delete_rule(&self, bus_name: &str, rule_name: &str) -> CloudResult<()> {
        self.client
            .delete_rule()
            .name(rule_name)
            .event_bus_name(bus_name)
            .force(true)
            .send()
            .await
            .map(|_| ())
            .map_err(|e| CloudError::service_unavailable(e.into_service_error().to_string()))
    }

    async fn list_rules(&self, bus_name: &str) -> CloudResult<Vec<Rule>> {
        let output = self
            .client
            .list_rules()
            .event_bus_name(bus_name)
            .send()
            .await
            .map_err(|e| CloudError::service_unavailable(e.into_service_error().to_string()))?;
        let mut rules = Vec::new();
        for rule in output.rules() {
            let name = rule.name().unwrap_or_default().to_string();
            let targets = self.targets_for(bus_name, &name).await?;
            rules.push(Rule {
                event_pattern: Self::pattern_from_json(rule.event_pattern().unwrap_or_default()),
                targets,
                enabled: rule.state().map(|s| s.as_str() == "ENABLED").unwrap_or(true),
                name,
            });
        }
        Ok(rules)
    }

    async fn put_targets(&self, bus_name: &str, rule_name: &str, targets: Vec<Target>) -> CloudResult<()> {
        let sdk_targets = targets
            .into_iter()
            .map(|t| SdkTarget::builder().id(t.id).arn(t.arn).build().map_err(|e| CloudError::validation(e.to_string())))
            .collect::<CloudResult<Vec<_>>>()?;
        self.client
            .put_targets()
            .rule(rule_name)
            .event_bus_name(bus_name)
            .set_targets(Some(sdk_targets))
            .send()
            .await
            .map(|_| ())
            .map_err(|e| CloudError::service_unavailable(e.into_service_error().to_string()))
    }

    async fn remove_targets(&self, bus_name: &str, rule_name: &str, target_ids: Vec<String>) -> CloudResult<()> {
        self.client
            .remove_targets()
            .rule(rule_name)
            .event_bus_name(bus_name)
            .set_ids(Some(target_ids))
            .send()
            .await
            .map(|_| ())
            .map_err(|e| CloudError::service_unavailable(e.into_service_error().to_string()))
    }

    async fn publish_event(&self, bus_name: &str, event: Event) -> CloudResult<String> {
        self.put_event(bus_name, event).await
    }
}

impl AwsEventBus {
    async fn put_event(&self, bus_name: &str, event: Event) -> CloudResult<String> {
        let entry = PutEventsRequestEntry::builder()
            .source(event.source)
            .detail_type(event.r#type)
            .detail(serde_json::Value::Object(event.data.into_iter().collect()).to_string())
            .event_bus_name(bus_name)
            .build();
        let output = self
            .client
            .put_events()
            .entries(entry)
            .send()
            .await
            .map_err(|e| CloudError::service_unavailable(e.into_service_error().to_string()))?;
        if output.failed_entry_count() > 0 {
            let reason = output
                .entries()
                .iter()
                .find_map(|e| e.error_message())
                .unwrap_or("event rejected by event bus");
            return Err(CloudError::service_unavailable(reason.to_string()));
        }
        Ok(output
            .entries()
            .first()
            .and_then(|e| e.event_id())
            .unwrap_or_default()
            .to_string())
    }
}

#[async_trait]
impl EventPublisher for AwsEventBus {
    async fn publish(&self, bus_name: &str, event: Event) -> CloudResult<()> {
        self.put_event(bus_name, event).await.map(|_| ())
    }

    async fn publish_batch(&self, bus_name: &str, events: Vec<Event>) -> CloudResult<Vec<CloudResult<()>>> {
        let mut results = Vec::with_capacity(events.len());
        for event in events {
            results.push(self.publish(bus_name, event).await);
        }
        Ok(results)
    }
}
