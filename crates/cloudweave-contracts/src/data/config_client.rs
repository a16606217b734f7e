use async_trait::async_trait;
use cloudweave_core::CloudResult;

/// Runtime read of the currently deployed configuration for an application
/// (spec §4.7) — deployment and versioning live on
/// [`crate::control::ConfigurationService`].
#[async_trait]
pub trait ConfigClient: Send + Sync {
    async fn get_active_configuration(
        &self,
        application: &str,
        environment: &str,
    ) -> CloudResult<serde_json::Value>;
}
