use async_trait::async_trait;
use cloudweave_core::models::job::{Job, JobStatus, ScheduledJob, SubmitJobParams};
use cloudweave_core::CloudResult;

/// Batch job execution and cron-style scheduling (spec §4.6).
///
/// `cancelJob` only succeeds while the job is `pending` or `running`;
/// terminal states are permanent.
#[async_trait]
pub trait BatchService: Send + Sync {
    async fn submit_job(&self, params: SubmitJobParams) -> CloudResult<Job>;
    async fn get_job(&self, id: &str) -> CloudResult<Job>;
    async fn cancel_job(&self, id: &str) -> CloudResult<Job>;
    async fn list_jobs(&self, status: Option<JobStatus>) -> CloudResult<Vec<Job>>;

    /// `schedule` is either a generalized cron expression or a
    /// `rate(...)` expression.
    async fn schedule_job(
        &self,
        name: &str,
        schedule: &str,
        template: SubmitJobParams,
    ) -> CloudResult<ScheduledJob>;
    async fn delete_scheduled_job(&self, id: &str) -> CloudResult<()>;
    async fn list_scheduled_jobs(&self) -> CloudResult<Vec<ScheduledJob>>;
}
