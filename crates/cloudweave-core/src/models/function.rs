use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerlessFunction {
    pub name: String,
    pub arn: Option<String>,
    pub runtime: String,
    pub handler: String,
    pub status: FunctionStatus,
    pub memory_size: u32,
    pub timeout: u32,
    pub environment: HashMap<String, String>,
    pub code_size: u64,
    pub version: String,
    pub created: jiff::Timestamp,
    pub last_updated: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionStatus {
    Creating,
    Active,
    Inactive,
    Failed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFunctionParams {
    pub name: String,
    pub runtime: String,
    pub handler: String,
    pub code: Vec<u8>,
    pub memory_size: u32,
    pub timeout: u32,
    #[serde(default)]
    pub environment: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateFunctionParams {
    pub code: Option<Vec<u8>>,
    pub handler: Option<String>,
    pub memory_size: Option<u32>,
    pub timeout: Option<u32>,
    pub environment: Option<HashMap<String, String>>,
}

/// Whether an invocation waits for the function's result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvocationType {
    Sync,
    Async,
    DryRun,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvokeParams {
    #[serde(default)]
    pub payload: Option<serde_json::Value>,
    #[serde(default = "default_invocation_type")]
    pub invocation_type: InvocationType,
}

fn default_invocation_type() -> InvocationType {
    InvocationType::Sync
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvocationResult {
    pub status_code: u16,
    pub payload: Option<serde_json::Value>,
    pub executed_version: Option<String>,
    pub function_error: Option<String>,
    pub log_result: Option<String>,
}

/// An event-source mapping (e.g. a queue wired to invoke a function).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventSourceMapping {
    pub id: String,
    pub function_name: String,
    pub event_source_arn: String,
    pub enabled: bool,
    pub batch_size: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FunctionUrlAuthType {
    None,
    Iam,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionUrlConfig {
    pub function_name: String,
    pub url: String,
    pub auth_type: FunctionUrlAuthType,
}
