use async_trait::async_trait;
use cloudweave_core::models::deployment::{
    DeployApplicationParams, Deployment, ScaleParams, UpdateApplicationParams,
};
use cloudweave_core::CloudResult;

/// Manages long-running web applications (spec §4.6).
///
/// `scaleApplication` raises `ValidationError` if `min > max`; update is
/// rolling, with `Deployment::status` progressing `updating -> running`.
#[async_trait]
pub trait WebHostingService: Send + Sync {
    async fn deploy_application(&self, params: DeployApplicationParams) -> CloudResult<Deployment>;
    async fn get_deployment(&self, id: &str) -> CloudResult<Deployment>;
    async fn update_application(
        &self,
        id: &str,
        params: UpdateApplicationParams,
    ) -> CloudResult<Deployment>;
    async fn delete_application(&self, id: &str) -> CloudResult<()>;
    async fn get_application_url(&self, id: &str) -> CloudResult<String>;
    async fn scale_application(&self, id: &str, params: ScaleParams) -> CloudResult<Deployment>;
}
