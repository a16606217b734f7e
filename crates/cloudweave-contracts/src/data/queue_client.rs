use async_trait::async_trait;
use cloudweave_core::models::queue::{Message, ReceiveParams, SendMessageParams};
use cloudweave_core::CloudResult;

/// Runtime send/receive against an already-provisioned queue (spec §4.7).
#[async_trait]
pub trait QueueClient: Send + Sync {
    async fn send_message(&self, queue: &str, params: SendMessageParams) -> CloudResult<Message>;
    async fn receive_messages(
        &self,
        queue: &str,
        params: ReceiveParams,
    ) -> CloudResult<Vec<Message>>;
    async fn delete_message(&self, queue: &str, receipt_handle: &str) -> CloudResult<()>;
}
