//! SNS/SES-backed [`NotificationService`]/[`NotificationClient`] adapter.
//! Topic pub/sub goes through SNS; the direct `send_email`/`send_sms`
//! convenience wrappers go through SES and SNS's phone-number publish,
//! matching the two channels AWS actually offers for unrouted sends.

use async_trait::async_trait;
use aws_sdk_sesv2::types::{Body, Content, Destination, EmailContent, Message as SesMessage};
use cloudweave_contracts::control::NotificationService;
use cloudweave_contracts::data::NotificationClient;
use cloudweave_core::models::notification::{Subscription, SubscriptionProtocol, SubscriptionState, Topic};
use cloudweave_core::{CloudError, CloudResult};

pub struct AwsNotification {
    sns: aws_sdk_sns::Client,
    ses: aws_sdk_sesv2::Client,
    from_address: String,
}

impl AwsNotification {
    pub fn new(sns: aws_sdk_sns::Client, ses: aws_sdk_sesv2::Client, from_address: String) -> Self {
        Self { sns, ses, from_address }
    }

    async fn topic_arn(&self, name: &str) -> CloudResult<String> {
        let mut next_token = None;
        loop {
            let mut request = self.sns.list_topics();
            if let Some(token) = &next_token {
                request = request.next_token(token);
            }
            let output = request
                .send()
                .await
                .map_err(|e| CloudError::service_unavailable(e.into_service_error().to_string()))?;
            for topic in output.topics() {
                if let Some(arn) = topic.topic_arn() {
                    if arn.ends_with(&format!(":{name}")) {
                        return Ok(arn.to_string());
                    }
                }
            }
            next_token = output.next_token().map(str::to_string);
            if next_token.is_none() {
                return Err(CloudError::not_found("topic", name));
            }
        }
    }

    async fn topic_from_arn(&self, arn: &str) -> CloudResult<Topic> {
        let name = arn.rsplit(':').next().unwrap_or(arn).to_string();
        let subs = self
            .sns
            .list_subscriptions_by_topic()
            .topic_arn(arn)
            .send()
            .await
            .map_err(|e| CloudError::service_unavailable(e.into_service_error().to_string()))?;
        let subscriptions = subs
            .subscriptions()
            .iter()
            .filter_map(|s| {
                let id = s.subscription_arn()?.to_string();
                let protocol = match s.protocol()? {
                    "email" => SubscriptionProtocol::Email,
                    "https" | "http" => SubscriptionProtocol::Https,
                    "sqs" => SubscriptionProtocol::Sqs,
                    "lambda" => SubscriptionProtocol::Lambda,
                    "sms" => SubscriptionProtocol::Sms,
                    _ => return None,
                };
                let state = if id == "PendingConfirmation" {
                    SubscriptionState::PendingConfirmation
                } else {
                    SubscriptionState::Confirmed
                };
                Some(Subscription {
                    id,
                    protocol,
                    endpoint: s.endpoint().unwrap_or_default().to_string(),
                    state,
                })
            })
            .collect();
        Ok(Topic {
            name,
            arn: arn.to_string(),
            subscriptions,
            created: jiff::Timestamp::now(),
        })
    }

    fn protocol_str(protocol: SubscriptionProtocol) -> &'static str {
        match protocol {
            SubscriptionProtocol::Email => "email",
            SubscriptionProtocol::Https => "https",
            SubscriptionProtocol::Sqs => "sqs",
            SubscriptionProtocol::Lambda => "lambda",
            SubscriptionProtocol::Sms => "sms",
        }
    }
}

#[async_trait]
impl NotificationService for AwsNotification {
    async fn create_topic(&self, name: &str) -> CloudResult<Topic> {
        let output = self
            .sns
            .create_topic()
            .name(name)
            .send()
            .await
            .map_err(|e| CloudError::conflict(e.into_service_error().to_string()))?;
        let arn = output.topic_arn().ok_or_else(|| CloudError::service_unavailable("topic ARN missing"))?;
        self.topic_from_arn(arn).await
    }

    async fn delete_topic(&self, name: &str) -> CloudResult<()> {
        let arn = self.topic_arn(name).await?;
        self.sns
            .delete_topic()
            .topic_arn(arn)
            .send()
            .await
            .map(|_| ())
            .map_err(|e| CloudError::service_unavailable(e.into_service_error().to_string()))
    }

    async fn list_topics(&self) -> CloudResult<Vec<Topic>> {
        let output = self
            .sns
            .list_topics()
            .send()
            .await
            .map_err(|e| CloudError::service_unavailable(e.into_service_error().to_string()))?;
        let mut topics = Vec::new();
        for topic in output.topics() {
            if let Some(arn) = topic.topic_arn() {
                topics.push(self.topic_from_arn(arn).await?);
            }
        }
        Ok(topics)
    }

    async fn subscribe(
        &self,
        topic_name: &str,
        protocol: SubscriptionProtocol,
        endpoint: &str,
    ) -> CloudResult<Topic> {
        let arn = self.topic_arn(topic_name).await?;
        self.sns
            .subscribe()
            .topic_arn(&arn)
            .protocol(Self::protocol_str(protocol))
            .endpoint(endpoint)
            .send()
            .await
            .map_err(|e| CloudError::service_unavailable(e.into_service_error().to_string()))?;
        self.topic_from_arn(&arn).await
    }

    async fn confirm_subscription(
        &self,
        topic_name: &str,
        _subscription_id: &str,
        token: &str,
    ) -> CloudResult<Topic> {
        let arn = self.topic_arn(topic_name).await?;
        self.sns
            .confirm_subscription()
            .topic_arn(&arn)
            .token(token)
            .send()
            .await
            .map_err(|e| CloudError::service_unavailable(e.into_service_error().to_string()))?;
        self.topic_from_arn(&arn).await
    }

    async fn unsubscribe(&self, _topic_name: &str, subscription_id: &str) -> CloudResult<()> {
        self.sns
            .unsubscribe()
            .subscription_arn(subscription_id)
            .send()
            .await
            .map(|_| ())
            .map_err(|e| CloudError::service_unavailable(e.into_service_error().to_string()))
    }

    async fn send_email(&self, to: &str, subject: &str, body: &str) -> CloudResult<String> {
        let content = EmailContent::builder()
            .simple(
                SesMessage::builder()
                    .subject(Content::builder().data(subject).build().map_err(|e| CloudError::validation(e.to_string()))?)
                    .body(Body::builder().text(Content::builder().data(body).build().map_err(|e| CloudError::validation(e.to_string()))?).build())
                    .build(),
            )
            .build();
        let output = self
            .ses
            .send_email()
            .from_email_address(&self.from_address)
            .destination(Destination::builder().to_addresses(to).build())
            .content(content)
            .send()
            .await
            .map_err(|e| CloudError::service_unavailable(e.into_service_error().to_string()))?;
        Ok(output.message_id().unwrap_or_default().to_string())
    }

    async fn send_sms(&self, to: &str, body: &str) -> CloudResult<String> {
        let output = self
            .sns
            .publish()
            .phone_number(to)
            .message(body)
            .send()
            .await
            .map_err(|e| CloudError::service_unavailable(e.into_service_error().to_string()))?;
        Ok(output.message_id().unwrap_or_default().to_string())
    }
}

#[async_trait]
impl NotificationClient for AwsNotification {
    async fn publish_to_topic(&self, topic_name: &str, message: &str) -> CloudResult<String> {
        let arn = self.topic_arn(topic_name).await?;
        let output = self
            .sns
            .publish()
            .topic_arn(arn)
            .message(message)
            .send()
            .await
            .map_err(|e| CloudError::service_unavailable(e.into_service_error().to_string()))?;
        Ok(output.message_id().unwrap_or_default().to_string())
    }

    async fn publish_batch(&self, topic_name: &str, messages: &[String]) -> CloudResult<Vec<CloudResult<String>>> {
        let mut results = Vec::with_capacity(messages.len());
        for message in messages {
            results.push(self.publish_to_topic(topic_name, message).await);
        }
        Ok(results)
    }
}
