use std::sync::Arc;

use async_trait::async_trait;
use cloudweave_contracts::control::ContainerRepoService;
use cloudweave_contracts::data::ContainerRepoClient;
use cloudweave_core::models::container_repo::{ContainerImage, LifecyclePolicy, Repository};
use cloudweave_core::{CloudError, CloudResult};

use crate::world::World;

pub struct MockContainerRepo {
    world: Arc<World>,
}

impl MockContainerRepo {
    pub fn new(world: Arc<World>) -> Self {
        Self { world }
    }
}

#[async_trait]
impl ContainerRepoService for MockContainerRepo {
    async fn create_repository(&self, name: &str) -> CloudResult<Repository> {
        self.world.latency.apply().await;
        let mut repositories = self.world.repositories.lock().await;
        if repositories.contains_key(name) {
            return Err(CloudError::conflict(format!("repository '{name}' already exists")));
        }
        let repository = Repository {
            name: name.to_string(),
            uri: format!("mock://registry/{name}"),
            created: jiff::Timestamp::now(),
        };
        repositories.insert(name.to_string(), repository.clone());
        self.world.images.lock().await.insert(name.to_string(), vec![]);
        Ok(repository)
    }

    async fn delete_repository(&self, name: &str) -> CloudResult<()> {
        self.world.latency.apply().await;
        self.world.lifecycle_policies.lock().await.remove(name);
        self.world.images.lock().await.remove(name);
        self.world
            .repositories
            .lock()
            .await
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| CloudError::not_found("repository", name))
    }

    async fn list_repositories(&self) -> CloudResult<Vec<Repository>> {
        self.world.latency.apply().await;
        Ok(self.world.repositories.lock().await.values().cloned().collect())
    }

    async fn set_lifecycle_policy(&self, repository: &str, policy: LifecyclePolicy) -> CloudResult<()> {
        self.world.latency.apply().await;
        if !self.world.repositories.lock().await.contains_key(repository) {
            return Err(CloudError::not_found("repository", repository));
        }
        self.world
            .lifecycle_policies
            .lock()
            .await
            .insert(repository.to_string(), policy);
        Ok(())
    }

    async fn list_images(&self, repository: &str) -> CloudResult<Vec<ContainerImage>> {
        ContainerRepoClient::list_images(self, repository).await
    }

    async fn delete_image(&self, repository: &str, tag: &str) -> CloudResult<()> {
        ContainerRepoClient::delete_images(self, repository, std::slice::from_ref(&tag.to_string())).await
    }
}

#[async_trait]
impl ContainerRepoClient for MockContainerRepo {
    async fn list_images(&self, repository: &str) -> CloudResult<Vec<ContainerImage>> {
        self.world.latency.apply().await;
        self.world
            .images
            .lock()
            .await
            .get(repository)
            .cloned()
            .ok_or_else(|| CloudError::not_found("repository", repository))
    }

    async fn get_image_by_tag(&self, repository: &str, tag: &str) -> CloudResult<ContainerImage> {
        self.world.latency.apply().await;
        let images = self.world.images.lock().await;
        let repository_images = images
            .get(repository)
            .ok_or_else(|| CloudError::not_found("repository", repository))?;
        repository_images
            .iter()
            .find(|image| image.tag == tag)
            .cloned()
            .ok_or_else(|| CloudError::not_found("image", format!("{repository}:{tag}")))
    }

    async fn delete_images(&self, repository: &str, tags: &[String]) -> CloudResult<()> {
        self.world.latency.apply().await;
        let mut images = self.world.images.lock().await;
        let repository_images = images
            .get_mut(repository)
            .ok_or_else(|| CloudError::not_found("repository", repository))?;
        repository_images.retain(|image| !tags.contains(&image.tag));
        Ok(())
    }

    async fn image_exists(&self, repository: &str, tag: &str) -> CloudResult<bool> {
        self.world.latency.apply().await;
        let images = self.world.images.lock().await;
        let repository_images = images
            .get(repository)
            .ok_or_else(|| CloudError::not_found("repository", repository))?;
        Ok(repository_images.iter().any(|image| image.tag == tag))
    }
}
