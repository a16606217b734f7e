use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use cloudweave_contracts::control::QueueService;
use cloudweave_contracts::data::QueueClient;
use cloudweave_core::models::queue::{Message, Queue, QueueOptions, ReceiveParams, SendMessageParams};
use cloudweave_core::{CloudError, CloudResult};

use crate::world::World;

pub struct MockQueue {
    world: Arc<World>,
}

impl MockQueue {
    pub fn new(world: Arc<World>) -> Self {
        Self { world }
    }
}

#[async_trait]
impl QueueService for MockQueue {
    async fn create_queue(&self, name: &str, options: QueueOptions) -> CloudResult<Queue> {
        self.world.latency.apply().await;
        let mut queues = self.world.queues.lock().await;
        if queues.contains_key(name) {
            return Err(CloudError::conflict(format!("queue '{name}' already exists")));
        }
        let queue = Queue {
            name: name.to_string(),
            url: format!("mock://queue/{name}"),
            message_count: 0,
            fifo: options.fifo,
            created: jiff::Timestamp::now(),
        };
        queues.insert(name.to_string(), queue.clone());
        self.world.queue_options.lock().await.insert(name.to_string(), options);
        self.world.messages.lock().await.insert(name.to_string(), VecDeque::new());
        Ok(queue)
    }

    async fn get_queue(&self, name: &str) -> CloudResult<Queue> {
        self.world.latency.apply().await;
        self.world
            .queues
            .lock()
            .await
            .get(name)
            .cloned()
            .ok_or_else(|| CloudError::not_found("queue", name))
    }

    async fn delete_queue(&self, name: &str) -> CloudResult<()> {
        self.world.latency.apply().await;
        self.world.queue_options.lock().await.remove(name);
        self.world.messages.lock().await.remove(name);
        self.world
            .queues
            .lock()
            .await
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| CloudError::not_found("queue", name))
    }

    async fn list_queues(&self) -> CloudResult<Vec<Queue>> {
        self.world.latency.apply().await;
        Ok(self.world.queues.lock().await.values().cloned().collect())
    }

    async fn purge_queue(&self, name: &str) -> CloudResult<()> {
        self.world.latency.apply().await;
        let mut messages = self.world.messages.lock().await;
        let queue_messages = messages
            .get_mut(name)
            .ok_or_else(|| CloudError::not_found("queue", name))?;
        queue_messages.clear();
        if let Some(queue) = self.world.queues.lock().await.get_mut(name) {
            queue.message_count = 0;
        }
        Ok(())
    }

    async fn send_message(&self, queue: &str, params: SendMessageParams) -> CloudResult<Message> {
        QueueClient::send_message(self, queue, params).await
    }

    async fn receive_messages(
        &self,
        queue: &str,
        params: ReceiveParams,
    ) -> CloudResult<Vec<Message>> {
        QueueClient::receive_messages(self, queue, params).await
    }

    async fn delete_message(&self, queue: &str, receipt_handle: &str) -> CloudResult<()> {
        QueueClient::delete_message(self, queue, receipt_handle).await
    }
}

#[async_trait]
impl QueueClient for MockQueue {
    async fn send_message(&self, queue: &str, params: SendMessageParams) -> CloudResult<Message> {
        self.world.latency.apply().await;
        if !self.world.queues.lock().await.contains_key(queue) {
            return Err(CloudError::not_found("queue", queue));
        }
        let options = self.world.queue_options.lock().await.get(queue).cloned().unwrap_or_default();
        if options.fifo {
            if let Some(dedup) = &params.deduplication_id {
                let messages = self.world.messages.lock().await;
                if let Some(existing) = messages.get(queue) {
                    if existing.iter().any(|m| m.deduplication_id.as_deref() == Some(dedup)) {
                        return Err(CloudError::conflict(format!(
                            "duplicate message with deduplicationId '{dedup}'"
                        )));
                    }
                }
            } else {
                return Err(CloudError::validation_at(
                    "/deduplicationId",
                    "Missing required field: deduplicationId (FIFO queue)",
                ));
            }
        }

        let id = self.world.ids.next("message").await;
        let message = Message {
            id,
            body: params.body,
            attributes: params.attributes,
            deduplication_id: params.deduplication_id,
            group_id: params.group_id,
            receipt_handle: self.world.ids.next("receipt").await,
        };

        let mut messages = self.world.messages.lock().await;
        messages.entry(queue.to_string()).or_default().push_back(message.clone());
        if let Some(q) = self.world.queues.lock().await.get_mut(queue) {
            q.message_count += 1;
        }
        Ok(message)
    }

    async fn receive_messages(
        &self,
        queue: &str,
        params: ReceiveParams,
    ) -> CloudResult<Vec<Message>> {
        self.world.latency.apply().await;
        let mut messages = self.world.messages.lock().await;
        let queue_messages = messages
            .get_mut(queue)
            .ok_or_else(|| CloudError::not_found("queue", queue))?;
        let take = (params.max_messages as usize).min(queue_messages.len());
        Ok(queue_messages.iter().take(take).cloned().collect())
    }

    async fn delete_message(&self, queue: &str, receipt_handle: &str) -> CloudResult<()> {
        self.world.latency.apply().await;
        let mut messages = self.world.messages.lock().await;
        let queue_messages = messages
            .get_mut(queue)
            .ok_or_else(|| CloudError::not_found("queue", queue))?;
        let before = queue_messages.len();
        queue_messages.retain(|m| m.receipt_handle != receipt_handle);
        if queue_messages.len() == before {
            return Err(CloudError::not_found("message", receipt_handle));
        }
        if let Some(q) = self.world.queues.lock().await.get_mut(queue) {
            q.message_count = q.message_count.saturating_sub(1);
        }
        Ok(())
    }
}
