use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A running web application managed by [`crate::models`]'s control plane.
///
/// Invariant: `min_instances <= max_instances`; `current_instances` stays
/// within `[min_instances, max_instances]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deployment {
    pub id: String,
    pub name: String,
    pub url: String,
    pub status: DeploymentStatus,
    pub image: String,
    pub cpu: u32,
    pub memory: u32,
    pub min_instances: u32,
    pub max_instances: u32,
    pub current_instances: u32,
    pub environment: HashMap<String, String>,
    pub created: jiff::Timestamp,
    pub last_updated: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentStatus {
    Creating,
    Running,
    Updating,
    Stopped,
    Failed,
}

/// Parameters accepted by `deployApplication`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployApplicationParams {
    pub name: String,
    pub image: String,
    pub port: u16,
    #[serde(default)]
    pub environment: HashMap<String, String>,
    pub cpu: u32,
    pub memory: u32,
    pub min_instances: u32,
    pub max_instances: u32,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

/// Parameters accepted by `updateApplication`. `None` fields are left
/// unchanged — this distinguishes "unset" from "explicitly empty".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateApplicationParams {
    pub image: Option<String>,
    pub environment: Option<HashMap<String, String>>,
    pub cpu: Option<u32>,
    pub memory: Option<u32>,
}

/// Requested instance bounds for `scaleApplication`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScaleParams {
    pub min_instances: u32,
    pub max_instances: u32,
}
