use async_trait::async_trait;
use cloudweave_core::models::container_repo::{ContainerImage, LifecyclePolicy, Repository};
use cloudweave_core::CloudResult;

/// Container image registry management (spec §4.6).
#[async_trait]
pub trait ContainerRepoService: Send + Sync {
    async fn create_repository(&self, name: &str) -> CloudResult<Repository>;
    async fn delete_repository(&self, name: &str) -> CloudResult<()>;
    async fn list_repositories(&self) -> CloudResult<Vec<Repository>>;
    async fn set_lifecycle_policy(
        &self,
        repository: &str,
        policy: LifecyclePolicy,
    ) -> CloudResult<()>;

    async fn list_images(&self, repository: &str) -> CloudResult<Vec<ContainerImage>>;
    async fn delete_image(&self, repository: &str, tag: &str) -> CloudResult<()>;
}
