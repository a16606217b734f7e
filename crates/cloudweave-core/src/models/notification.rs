use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
    pub arn: String,
    pub subscriptions: Vec<Subscription>,
    pub created: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionProtocol {
    Email,
    Https,
    Sqs,
    Lambda,
    Sms,
}

impl SubscriptionProtocol {
    /// Email/HTTPS subscriptions start unconfirmed; everything else is
    /// confirmed the moment it's created (spec §3).
    pub fn starts_confirmed(self) -> bool {
        !matches!(self, SubscriptionProtocol::Email | SubscriptionProtocol::Https)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionState {
    PendingConfirmation,
    Confirmed,
    Unsubscribed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    pub id: String,
    pub protocol: SubscriptionProtocol,
    pub endpoint: String,
    pub state: SubscriptionState,
}

impl Subscription {
    /// Whether this subscription has finished confirming and can receive
    /// publishes (the mock's deliverability gate for `publishToTopic`).
    pub fn confirmed(&self) -> bool {
        self.state == SubscriptionState::Confirmed
    }
}
