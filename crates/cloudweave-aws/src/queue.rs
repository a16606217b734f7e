//! SQS-backed [`QueueService`]/[`QueueClient`] adapter. Every operation
//! resolves `name` to a queue URL via `GetQueueUrl` first, since SQS
//! addresses queues by URL rather than by name.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_sqs::types::{MessageAttributeValue, MessageSystemAttributeName, QueueAttributeName};
use cloudweave_contracts::control::QueueService;
use cloudweave_contracts::data::QueueClient;
use cloudweave_core::models::queue::{Message, MessageBody, Queue, QueueOptions, ReceiveParams, SendMessageParams};
use cloudweave_core::{CloudError, CloudResult};

pub struct AwsQueue {
    client: aws_sdk_sqs::Client,
}

impl AwsQueue {
    pub fn new(client: aws_sdk_sqs::Client) -> Self {
        Self { client }
    }

    async fn queue_url(&self, name: &str) -> CloudResult<String> {
        self.client
            .get_queue_url()
            .queue_name(name)
            .send()
            .await
            .map_err(|e| CloudError::not_found("queue", format!("{name}: {}", e.into_service_error())))?
            .queue_url()
            .map(str::to_string)
            .ok_or_else(|| CloudError::not_found("queue", name))
    }

    fn body_to_string(body: &MessageBody) -> String {
        match body {
            MessageBody::Text(text) => text.clone(),
            MessageBody::Structured(json) => json.to_string(),
        }
    }

    fn body_from_string(raw: &str) -> MessageBody {
        match serde_json::from_str(raw) {
            Ok(json) => MessageBody::Structured(json),
            Err(_) => MessageBody::Text(raw.to_string()),
        }
    }
}

#[async_trait]
impl QueueService for AwsQueue {
    async fn create_queue(&self, name: &str, options: QueueOptions) -> CloudResult<Queue> {
        let mut attributes = HashMap::new();
        attributes.insert(
            QueueAttributeName::VisibilityTimeout,
            options.visibility_timeout.to_string(),
        );
        attributes.insert(
            QueueAttributeName::MessageRetentionPeriod,
            options.message_retention.to_string(),
        );
        if options.fifo {
            attributes.insert(QueueAttributeName::FifoQueue, "true".to_string());
        }

        if options.enable_dead_letter {
            let dlq_name = if options.fifo { format!("{name}-dlq.fifo") } else { format!("{name}-dlq") };
            let mut dlq_attributes = HashMap::new();
            if options.fifo {
                dlq_attributes.insert(QueueAttributeName::FifoQueue, "true".to_string());
            }
            let dlq = self
                .client
                .create_queue()
                .queue_name(&dlq_name)
                .set_attributes(Some(dlq_attributes))
                .send()
                .await
                .map_err(|e| CloudError::service_unavailable(e.into_service_error().to_string()))?;
            let dlq_url = dlq.queue_url().ok_or_else(|| CloudError::service_unavailable("dead-letter queue URL missing"))?;
            let dlq_arn = self
                .client
                .get_queue_attributes()
                .queue_url(dlq_url)
                .attribute_names(QueueAttributeName::QueueArn)
                .send()
                .await
                .map_err(|e| CloudError::service_unavailable(e.into_service_error().to_string()))?
                .attributes()
                .and_then(|a| a.get(&QueueAttributeName::QueueArn))
                .cloned()
                .ok_or_else(|| CloudError::service_unavailable("dead-letter queue ARN missing"))?;
            let redrive_policy = serde_json::json!({
                "deadLetterTargetArn": dlq_arn,
                "maxReceiveCount": options.dead_letter_after_retries.max(1),
            });
            attributes.insert(QueueAttributeName::RedrivePolicy, redrive_policy.to_string());
        }

        let output = self
            .client
            .create_queue()
            .queue_name(name)
            .set_attributes(Some(attributes))
            .send()
            .await
            .map_err(|e| CloudError::conflict(e.into_service_error().to_string()))?;

        Ok(Queue {
            name: name.to_string(),
            url: output.queue_url().unwrap_or_default().to_string(),
            message_count: 0,
            fifo: options.fifo,
            created: jiff::Timestamp::now(),
        })
    }

    async fn get_queue(&self, name: &str) -> CloudResult<Queue> {
        let url = self.queue_url(name).await?;
        let attrs = self
            .client
            .get_queue_attributes()
            .queue_url(&url)
            .attribute_names(QueueAttributeName::All)
            .send()
            .await
            .map_err(|e| CloudError::service_unavailable(e.into_service_error().to_string()))?;
        let attributes = attrs.attributes().cloned().unwrap_or_default();
        let message_count = attributes
            .get(&QueueAttributeName::ApproximateNumberOfMessages)
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);
        let created = attributes
            .get(&QueueAttributeName::CreatedTimestamp)
            .and_then(|v| v.parse::<i64>().ok())
            .and_then(|s| jiff::Timestamp::from_second(s).ok())
            .unwrap_or_else(jiff::Timestamp::now);
        Ok(Queue {
            name: name.to_string(),
            url,
            message_count,
            fifo: name.ends_with(".fifo"),
            created,
        })
    }

    async fn delete_queue(&self, name: &str) -> CloudResult<()> {
        let url = self.queue_url(name).await?;
        self.client
            .delete_queue()
            .queue_url(url)
            .send()
            .await
            .map(|_| ())
            .map_err(|e| CloudError::service_unavailable(e.into_service_error().to_string()))
    }

    async fn list_queues(&self) -> CloudResult<Vec<Queue>> {
        let output = self
            .client
            .list_queues()
            .send()
            .await
            .map_err(|e| CloudError::service_unavailable(e.into_service_error().to_string()))?;
        let mut queues = Vec::new();
        for url in output.queue_urls() {
            let name = url.rsplit('/').next().unwrap_or(url).to_string();
            queues.push(self.get_queue(&name).await?);
        }
        Ok(queues)
    }

    async fn purge_queue(&self, name: &str) -> CloudResult<()> {
        let url = self.queue_url(name).await?;
        self.client
            .purge_queue()
            .queue_url(url)
            .send()
            .await
            .map(|_| ())
            .map_err(|e| CloudError::service_unavailable(e.into_service_error().to_string()))
    }

    async fn send_message(&self, queue: &str, params: SendMessageParams) -> CloudResult<Message> {
        QueueClient::send_message(self, queue, params).await
    }

    async fn receive_messages(&self, queue: &str, params: ReceiveParams) -> CloudResult<Vec<Message>> {
        QueueClient::receive_messages(self, queue, params).await
    }

    async fn delete_message(&self, queue: &str, receipt_handle: &str) -> CloudResult<()> {
        QueueClient::delete_message(self, queue, receipt_handle).await
    }
}

#[async_trait]
impl QueueClient for AwsQueue {
    async fn send_message(&self, queue: &str, params: SendMessageParams) -> CloudResult<Message> {
        let url = self.queue_url(queue).await?;
        let mut request = self
            .client
            .send_message()
            .queue_url(&url)
            .message_body(Self::body_to_string(&params.body));
        for (key, value) in &params.attributes {
            request = request.message_attributes(
                key,
                MessageAttributeValue::builder()
                    .data_type("String")
                    .string_value(value)
                    .build()
                    .map_err(|e| CloudError::validation(e.to_string()))?,
            );
        }
        if let Some(group_id) = &params.group_id {
            request = request.message_group_id(group_id);
        }
        if let Some(dedup_id) = &params.deduplication_id {
            request = request.message_deduplication_id(dedup_id);
        }
        let output = request
            .send()
            .await
            .map_err(|e| CloudError::service_unavailable(e.into_service_error().to_string()))?;
        Ok(Message {
            id: output.message_id().unwrap_or_default().to_string(),
            body: params.body,
            attributes: params.attributes,
            deduplication_id: params.deduplication_id,
            group_id: params.group_id,
            receipt_handle: String::new(),
        })
    }

    async fn receive_messages(&self, queue: &str, params: ReceiveParams) -> CloudResult<Vec<Message>> {
        let url = self.queue_url(queue).await?;
        let output = self
            .client
            .receive_message()
            .queue_url(url)
            .max_number_of_messages(params.max_messages.clamp(1, 10) as i32)
            .wait_time_seconds(params.wait_time_seconds.min(20) as i32)
            .message_system_attribute_names(MessageSystemAttributeName::All)
            .send()
            .await
            .map_err(|e| CloudError::service_unavailable(e.into_service_error().to_string()))?;

        Ok(output
            .messages()
            .iter()
            .map(|m| {
                let system_attrs = m.attributes().cloned().unwrap_or_default();
                Message {
                    id: m.message_id().unwrap_or_default().to_string(),
                    body: Self::body_from_string(m.body().unwrap_or_default()),
                    attributes: HashMap::new(),
                    deduplication_id: system_attrs
                        .get(&MessageSystemAttributeName::MessageDeduplicationId)
                        .cloned(),
                    group_id: system_attrs.get(&MessageSystemAttributeName::MessageGroupId).cloned(),
                    receipt_handle: m.receipt_handle().unwrap_or_default().to_string(),
                }
            })
            .collect())
    }

    async fn delete_message(&self, queue: &str, receipt_handle: &str) -> CloudResult<()> {
        let url = self.queue_url(queue).await?;
        self.client
            .delete_message()
            .queue_url(url)
            .receipt_handle(receipt_handle)
            .send()
            .await
            .map(|_| ())
            .map_err(|e| CloudError::service_unavailable(e.into_service_error().to_string()))
    }
}
