use std::sync::Arc;

use async_trait::async_trait;
use cloudweave_contracts::control::BatchService;
use cloudweave_core::models::job::{Job, JobStatus, ScheduledJob, SubmitJobParams};
use cloudweave_core::{CloudError, CloudResult};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use crate::world::World;

pub struct MockBatch {
    world: Arc<World>,
}

impl MockBatch {
    pub fn new(world: Arc<World>) -> Self {
        Self { world }
    }

    /// Advances a freshly submitted job straight to a terminal state using
    /// the world's seeded RNG, so tests never depend on wall-clock delay
    /// (spec §4.8's "bounded number of scheduler turns").
    async fn simulate(&self, job_id: &str) {
        let mut jobs = self.world.jobs.lock().await;
        let Some(job) = jobs.get_mut(job_id) else { return };
        job.status = JobStatus::Running;

        let mut rng = StdRng::seed_from_u64(self.world.seed() ^ hash_id(job_id));
        let succeeds = rng.gen_bool(0.9);
        if succeeds {
            job.status = JobStatus::Succeeded;
            job.exit_code = Some(0);
        } else {
            job.status = JobStatus::Failed;
            job.exit_code = Some(1);
            job.error = Some("simulated failure".to_string());
        }
        job.attempts_made += 1;
        job.last_updated = jiff::Timestamp::now();
    }
}

fn hash_id(id: &str) -> u64 {
    id.bytes().fold(0u64, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u64))
}

#[async_trait]
impl BatchService for MockBatch {
    async fn submit_job(&self, params: SubmitJobParams) -> CloudResult<Job> {
        self.world.latency.apply().await;
        let id = self.world.ids.next("job").await;
        let now = jiff::Timestamp::now();
        let job = Job {
            id: id.clone(),
            name: params.name,
            status: JobStatus::Pending,
            image: params.image,
            command: params.command,
            environment: params.environment,
            cpu: params.cpu,
            memory: params.memory,
            timeout: params.timeout,
            retry_count: params.retry_count,
            attempts_made: 0,
            exit_code: None,
            error: None,
            created: now,
            last_updated: now,
        };
        self.world.jobs.lock().await.insert(id.clone(), job);
        self.simulate(&id).await;
        self.get_job(&id).await
    }

    async fn get_job(&self, id: &str) -> CloudResult<Job> {
        self.world.latency.apply().await;
        self.world
            .jobs
            .lock()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| CloudError::not_found("job", id))
    }

    async fn cancel_job(&self, id: &str) -> CloudResult<Job> {
        self.world.latency.apply().await;
        let mut jobs = self.world.jobs.lock().await;
        let job = jobs.get_mut(id).ok_or_else(|| CloudError::not_found("job", id))?;
        if job.status.is_terminal() {
            return Err(CloudError::conflict(format!(
                "job '{id}' is already in a terminal state"
            )));
        }
        job.status = JobStatus::Cancelled;
        job.last_updated = jiff::Timestamp::now();
        Ok(job.clone())
    }

    async fn list_jobs(&self, status: Option<JobStatus>) -> CloudResult<Vec<Job>> {
        self.world.latency.apply().await;
        Ok(self
            .world
            .jobs
            .lock()
            .await
            .values()
            .filter(|j| status.map(|s| s == j.status).unwrap_or(true))
            .cloned()
            .collect())
    }

    async fn schedule_job(
        &self,
        name: &str,
        schedule: &str,
        template: SubmitJobParams,
    ) -> CloudResult<ScheduledJob> {
        self.world.latency.apply().await;
        let id = self.world.ids.next("scheduled-job").await;
        let scheduled = ScheduledJob {
            id: id.clone(),
            name: name.to_string(),
            schedule: schedule.to_string(),
            enabled: true,
            job_template: template,
            created: jiff::Timestamp::now(),
        };
        self.world
            .scheduled_jobs
            .lock()
            .await
            .insert(id, scheduled.clone());
        Ok(scheduled)
    }

    async fn delete_scheduled_job(&self, id: &str) -> CloudResult<()> {
        self.world.latency.apply().await;
        self.world
            .scheduled_jobs
            .lock()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| CloudError::not_found("scheduled_job", id))
    }

    async fn list_scheduled_jobs(&self) -> CloudResult<Vec<ScheduledJob>> {
        self.world.latency.apply().await;
        Ok(self.world.scheduled_jobs.lock().await.values().cloned().collect())
    }
}
