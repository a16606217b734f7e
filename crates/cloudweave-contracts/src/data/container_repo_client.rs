use async_trait::async_trait;
use cloudweave_core::models::container_repo::ContainerImage;
use cloudweave_core::CloudResult;

/// Runtime image lookup against a container repository (spec §4.7).
/// Repository and lifecycle-policy administration live on
/// [`crate::control::ContainerRepoService`].
#[async_trait]
pub trait ContainerRepoClient: Send + Sync {
    async fn list_images(&self, repository: &str) -> CloudResult<Vec<ContainerImage>>;
    async fn get_image_by_tag(&self, repository: &str, tag: &str) -> CloudResult<ContainerImage>;
    async fn delete_images(&self, repository: &str, tags: &[String]) -> CloudResult<()>;
    async fn image_exists(&self, repository: &str, tag: &str) -> CloudResult<bool>;
}
