use async_trait::async_trait;
use cloudweave_core::CloudResult;

/// Runtime publish against an already-provisioned topic (spec §4.7).
/// Delivery only reaches subscriptions in the `confirmed` state.
#[async_trait]
pub trait NotificationClient: Send + Sync {
    async fn publish_to_topic(&self, topic_name: &str, message: &str) -> CloudResult<String>;
    async fn publish_batch(
        &self,
        topic_name: &str,
        messages: &[String],
    ) -> CloudResult<Vec<CloudResult<String>>>;
}
