use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Queue {
    pub name: String,
    pub url: String,
    pub message_count: u64,
    pub fifo: bool,
    pub created: jiff::Timestamp,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueOptions {
    #[serde(default = "default_visibility_timeout")]
    pub visibility_timeout: u32,
    #[serde(default = "default_message_retention")]
    pub message_retention: u32,
    #[serde(default = "default_max_message_size")]
    pub max_message_size: u32,
    #[serde(default)]
    pub fifo: bool,
    #[serde(default)]
    pub enable_dead_letter: bool,
    #[serde(default)]
    pub dead_letter_after_retries: u32,
}

impl Default for QueueOptions {
    fn default() -> Self {
        Self {
            visibility_timeout: default_visibility_timeout(),
            message_retention: default_message_retention(),
            max_message_size: default_max_message_size(),
            fifo: false,
            enable_dead_letter: false,
            dead_letter_after_retries: 0,
        }
    }
}

fn default_visibility_timeout() -> u32 {
    30
}
fn default_message_retention() -> u32 {
    345_600 // 4 days, in seconds
}
fn default_max_message_size() -> u32 {
    262_144 // 256 KiB
}

/// The body of a queue message — either a raw string or structured JSON,
/// matching spec §3's "`body` (string or structured)".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageBody {
    Text(String),
    Structured(serde_json::Value),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageParams {
    pub body: MessageBody,
    #[serde(default)]
    pub attributes: HashMap<String, String>,
    pub deduplication_id: Option<String>,
    pub group_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub body: MessageBody,
    pub attributes: HashMap<String, String>,
    pub deduplication_id: Option<String>,
    pub group_id: Option<String>,
    /// Opaque token required to `deleteMessage`/acknowledge this receipt.
    pub receipt_handle: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReceiveParams {
    #[serde(default = "default_max_messages")]
    pub max_messages: u32,
    #[serde(default)]
    pub wait_time_seconds: u32,
}

fn default_max_messages() -> u32 {
    1
}
