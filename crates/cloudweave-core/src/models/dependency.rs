use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A declarative description of one cloud dependency (spec §3, schema §6.2).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationDependency {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub type_: DependencyType,
    pub provider: DependencyProvider,
    pub region: String,
    pub status: DependencyStatus,
    pub created: String,
    pub updated: String,
    pub version: Option<String>,
    pub environment: Option<DependencyEnvironment>,
    pub description: Option<String>,
    pub configuration: Option<serde_json::Value>,
    pub policy: Option<serde_json::Value>,
    pub generated_name: Option<String>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
    #[serde(default)]
    pub dependencies: Vec<String>,
    pub deployed_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DependencyType {
    Database,
    Cache,
    Queue,
    Storage,
    Compute,
    Network,
    Secrets,
    Config,
    EventBus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyProvider {
    Aws,
    Azure,
    Gcp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DependencyStatus {
    Pending,
    Validating,
    Valid,
    Invalid,
    Deploying,
    Deployed,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyEnvironment {
    Dev,
    Staging,
    Prod,
}
