use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub name: String,
    pub status: JobStatus,
    pub image: String,
    pub command: Vec<String>,
    pub environment: HashMap<String, String>,
    pub cpu: u32,
    pub memory: u32,
    pub timeout: u32,
    pub retry_count: u32,
    pub attempts_made: u32,
    pub exit_code: Option<i32>,
    pub error: Option<String>,
    pub created: jiff::Timestamp,
    pub last_updated: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Pending,
    Running,
    Succeeded,
    Failed,
    Cancelled,
}

impl JobStatus {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            JobStatus::Succeeded | JobStatus::Failed | JobStatus::Cancelled
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitJobParams {
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub command: Vec<String>,
    #[serde(default)]
    pub environment: HashMap<String, String>,
    pub cpu: u32,
    pub memory: u32,
    #[serde(default = "default_timeout")]
    pub timeout: u32,
    #[serde(default)]
    pub retry_count: u32,
}

fn default_timeout() -> u32 {
    3600
}

/// A recurring job, scheduled by cron expression or `rate(...)` expression.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledJob {
    pub id: String,
    pub name: String,
    pub schedule: String,
    pub enabled: bool,
    pub job_template: SubmitJobParams,
    pub created: jiff::Timestamp,
}
