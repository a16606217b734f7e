use async_trait::async_trait;
use cloudweave_core::models::notification::{SubscriptionProtocol, Topic};
use cloudweave_core::CloudResult;

/// Pub/sub topic and subscription management (spec §4.6). Publishing lives
/// on [`crate::data::NotificationClient`].
#[async_trait]
pub trait NotificationService: Send + Sync {
    async fn create_topic(&self, name: &str) -> CloudResult<Topic>;
    async fn delete_topic(&self, name: &str) -> CloudResult<()>;
    async fn list_topics(&self) -> CloudResult<Vec<Topic>>;

    /// Email/HTTPS subscriptions start `pending_confirmation`; every other
    /// protocol is confirmed immediately (spec §3).
    async fn subscribe(
        &self,
        topic_name: &str,
        protocol: SubscriptionProtocol,
        endpoint: &str,
    ) -> CloudResult<Topic>;
    async fn confirm_subscription(
        &self,
        topic_name: &str,
        subscription_id: &str,
        token: &str,
    ) -> CloudResult<Topic>;
    async fn unsubscribe(&self, topic_name: &str, subscription_id: &str) -> CloudResult<()>;

    /// Convenience wrapper over a dedicated transactional-email channel;
    /// not routed through a topic. Returns the provider message id.
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> CloudResult<String>;
    /// Convenience wrapper over a dedicated SMS channel. Returns the
    /// provider message id.
    async fn send_sms(&self, to: &str, body: &str) -> CloudResult<String>;
}
