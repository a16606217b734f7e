use async_trait::async_trait;
use cloudweave_core::models::queue::{Message, Queue, QueueOptions, ReceiveParams, SendMessageParams};
use cloudweave_core::CloudResult;

/// Queue lifecycle management (spec §4.6). Runtime send/receive lives on
/// [`crate::data::QueueClient`] instead — control here is create/get/delete
/// plus the management-only operations (`purgeQueue`, `listQueues`).
///
/// FIFO queues enforce per-group ordering and deduplication by
/// `deduplicationId`; standard queues make no ordering promise.
#[async_trait]
pub trait QueueService: Send + Sync {
    async fn create_queue(&self, name: &str, options: QueueOptions) -> CloudResult<Queue>;
    async fn get_queue(&self, name: &str) -> CloudResult<Queue>;
    async fn delete_queue(&self, name: &str) -> CloudResult<()>;
    async fn list_queues(&self) -> CloudResult<Vec<Queue>>;
    async fn purge_queue(&self, name: &str) -> CloudResult<()>;

    async fn send_message(&self, queue: &str, params: SendMessageParams) -> CloudResult<Message>;
    async fn receive_messages(
        &self,
        queue: &str,
        params: ReceiveParams,
    ) -> CloudResult<Vec<Message>>;
    async fn delete_message(&self, queue: &str, receipt_handle: &str) -> CloudResult<()>;
}
