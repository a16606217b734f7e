use std::sync::Arc;

use async_trait::async_trait;
use cloudweave_contracts::control::WebHostingService;
use cloudweave_core::models::deployment::{
    DeployApplicationParams, Deployment, DeploymentStatus, ScaleParams, UpdateApplicationParams,
};
use cloudweave_core::{CloudError, CloudResult};

use crate::world::World;

pub struct MockWebHosting {
    world: Arc<World>,
}

impl MockWebHosting {
    pub fn new(world: Arc<World>) -> Self {
        Self { world }
    }
}

#[async_trait]
impl WebHostingService for MockWebHosting {
    async fn deploy_application(&self, params: DeployApplicationParams) -> CloudResult<Deployment> {
        self.world.latency.apply().await;
        if params.min_instances > params.max_instances {
            return Err(CloudError::validation_at(
                "/minInstances",
                "minInstances must be <= maxInstances",
            ));
        }
        let id = self.world.ids.next("deployment").await;
        let now = jiff::Timestamp::now();
        let deployment = Deployment {
            id: id.clone(),
            name: params.name,
            url: format!("https://{id}.mock.cloudweave.local"),
            status: DeploymentStatus::Running,
            image: params.image,
            cpu: params.cpu,
            memory: params.memory,
            min_instances: params.min_instances,
            max_instances: params.max_instances,
            current_instances: params.min_instances,
            environment: params.environment,
            created: now,
            last_updated: now,
        };
        self.world.deployments.lock().await.insert(id, deployment.clone());
        Ok(deployment)
    }

    async fn get_deployment(&self, id: &str) -> CloudResult<Deployment> {
        self.world.latency.apply().await;
        self.world
            .deployments
            .lock()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| CloudError::not_found("deployment", id))
    }

    async fn update_application(
        &self,
        id: &str,
        params: UpdateApplicationParams,
    ) -> CloudResult<Deployment> {
        self.world.latency.apply().await;
        let mut deployments = self.world.deployments.lock().await;
        let deployment = deployments
            .get_mut(id)
            .ok_or_else(|| CloudError::not_found("deployment", id))?;
        deployment.status = DeploymentStatus::Updating;
        if let Some(image) = params.image {
            deployment.image = image;
        }
        if let Some(environment) = params.environment {
            deployment.environment = environment;
        }
        if let Some(cpu) = params.cpu {
            deployment.cpu = cpu;
        }
        if let Some(memory) = params.memory {
            deployment.memory = memory;
        }
        deployment.status = DeploymentStatus::Running;
        deployment.last_updated = jiff::Timestamp::now();
        Ok(deployment.clone())
    }

    async fn delete_application(&self, id: &str) -> CloudResult<()> {
        self.world.latency.apply().await;
        self.world
            .deployments
            .lock()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| CloudError::not_found("deployment", id))
    }

    async fn get_application_url(&self, id: &str) -> CloudResult<String> {
        self.get_deployment(id).await.map(|d| d.url)
    }

    async fn scale_application(&self, id: &str, params: ScaleParams) -> CloudResult<Deployment> {
        self.world.latency.apply().await;
        if params.min_instances > params.max_instances {
            return Err(CloudError::validation_at(
                "/minInstances",
                "minInstances must be <= maxInstances",
            ));
        }
        let mut deployments = self.world.deployments.lock().await;
        let deployment = deployments
            .get_mut(id)
            .ok_or_else(|| CloudError::not_found("deployment", id))?;
        deployment.min_instances = params.min_instances;
        deployment.max_instances = params.max_instances;
        deployment.current_instances = deployment
            .current_instances
            .clamp(params.min_instances, params.max_instances);
        deployment.last_updated = jiff::Timestamp::now();
        Ok(deployment.clone())
    }
}
