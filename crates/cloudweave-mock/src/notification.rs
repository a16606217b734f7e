use std::sync::Arc;

use async_trait::async_trait;
use cloudweave_contracts::control::NotificationService;
use cloudweave_contracts::data::NotificationClient;
use cloudweave_core::models::notification::{Subscription, SubscriptionProtocol, SubscriptionState, Topic};
use cloudweave_core::{CloudError, CloudResult};

use crate::world::World;

pub struct MockNotification {
    world: Arc<World>,
}

impl MockNotification {
    pub fn new(world: Arc<World>) -> Self {
        Self { world }
    }
}

#[async_trait]
impl NotificationService for MockNotification {
    async fn create_topic(&self, name: &str) -> CloudResult<Topic> {
        self.world.latency.apply().await;
        let mut topics = self.world.topics.lock().await;
        if topics.contains_key(name) {
            return Err(CloudError::conflict(format!("topic '{name}' already exists")));
        }
        let topic = Topic {
            name: name.to_string(),
            arn: format!("mock:topic:{name}"),
            subscriptions: vec![],
            created: jiff::Timestamp::now(),
        };
        topics.insert(name.to_string(), topic.clone());
        Ok(topic)
    }

    async fn delete_topic(&self, name: &str) -> CloudResult<()> {
        self.world.latency.apply().await;
        self.world
            .topics
            .lock()
            .await
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| CloudError::not_found("topic", name))
    }

    async fn list_topics(&self) -> CloudResult<Vec<Topic>> {
        self.world.latency.apply().await;
        Ok(self.world.topics.lock().await.values().cloned().collect())
    }

    async fn subscribe(
        &self,
        topic_name: &str,
        protocol: SubscriptionProtocol,
        endpoint: &str,
    ) -> CloudResult<Topic> {
        self.world.latency.apply().await;
        let mut topics = self.world.topics.lock().await;
        let topic = topics
            .get_mut(topic_name)
            .ok_or_else(|| CloudError::not_found("topic", topic_name))?;
        let id = self.world.ids.next("subscription").await;
        let state = if protocol.starts_confirmed() {
            SubscriptionState::Confirmed
        } else {
            SubscriptionState::PendingConfirmation
        };
        topic.subscriptions.push(Subscription {
            id,
            protocol,
            endpoint: endpoint.to_string(),
            state,
        });
        Ok(topic.clone())
    }

    async fn confirm_subscription(
        &self,
        topic_name: &str,
        subscription_id: &str,
        _token: &str,
    ) -> CloudResult<Topic> {
        self.world.latency.apply().await;
        let mut topics = self.world.topics.lock().await;
        let topic = topics
            .get_mut(topic_name)
            .ok_or_else(|| CloudError::not_found("topic", topic_name))?;
        let subscription = topic
            .subscriptions
            .iter_mut()
            .find(|s| s.id == subscription_id)
            .ok_or_else(|| CloudError::not_found("subscription", subscription_id))?;
        subscription.state = SubscriptionState::Confirmed;
        Ok(topic.clone())
    }

    async fn unsubscribe(&self, topic_name: &str, subscription_id: &str) -> CloudResult<()> {
        self.world.latency.apply().await;
        let mut topics = self.world.topics.lock().await;
        let topic = topics
            .get_mut(topic_name)
            .ok_or_else(|| CloudError::not_found("topic", topic_name))?;
        let subscription = topic
            .subscriptions
            .iter_mut()
            .find(|s| s.id == subscription_id)
            .ok_or_else(|| CloudError::not_found("subscription", subscription_id))?;
        subscription.state = SubscriptionState::Unsubscribed;
        Ok(())
    }

    async fn send_email(&self, _to: &str, _subject: &str, _body: &str) -> CloudResult<String> {
        self.world.latency.apply().await;
        Ok(self.world.ids.next("email").await)
    }

    async fn send_sms(&self, _to: &str, _body: &str) -> CloudResult<String> {
        self.world.latency.apply().await;
        Ok(self.world.ids.next("sms").await)
    }
}

#[async_trait]
impl NotificationClient for MockNotification {
    async fn publish_to_topic(&self, topic_name: &str, _message: &str) -> CloudResult<String> {
        self.world.latency.apply().await;
        let topics = self.world.topics.lock().await;
        let topic = topics
            .get(topic_name)
            .ok_or_else(|| CloudError::not_found("topic", topic_name))?;
        if !topic.subscriptions.iter().any(|s| s.confirmed()) {
            return Err(CloudError::conflict(format!(
                "topic '{topic_name}' has no confirmed subscriptions"
            )));
        }
        Ok(self.world.ids.next("notification").await)
    }

    async fn publish_batch(
        &self,
        topic_name: &str,
        messages: &[String],
    ) -> CloudResult<Vec<CloudResult<String>>> {
        self.world.latency.apply().await;
        let mut results = Vec::with_capacity(messages.len());
        for message in messages {
            results.push(self.publish_to_topic(topic_name, message).await);
        }
        Ok(results)
    }
}
