use async_trait::async_trait;
use cloudweave_core::models::configuration::{Configuration, ConfigurationProfile};
use cloudweave_reliability::validator::ValidationOutcome;
use cloudweave_core::CloudResult;

/// Versioned application configuration (spec §4.6). Each
/// `(application, environment)` pair owns a [`ConfigurationProfile`] whose
/// `deployed_version` tracks which [`Configuration`] is currently live.
#[async_trait]
pub trait ConfigurationService: Send + Sync {
    /// Delegates to the reliability-layer validator (§4.4) against a
    /// caller-supplied JSON Schema; does not touch stored configuration.
    async fn validate_configuration(
        &self,
        content: &serde_json::Value,
        schema: &serde_json::Value,
    ) -> CloudResult<ValidationOutcome>;

    async fn create_configuration(
        &self,
        application: &str,
        environment: &str,
        data: serde_json::Value,
        description: Option<String>,
    ) -> CloudResult<Configuration>;
    async fn get_configuration(
        &self,
        application: &str,
        environment: &str,
        version: Option<u32>,
    ) -> CloudResult<Configuration>;
    async fn deploy_configuration(
        &self,
        application: &str,
        environment: &str,
        version: u32,
    ) -> CloudResult<Configuration>;
    async fn list_configuration_versions(
        &self,
        application: &str,
        environment: &str,
    ) -> CloudResult<ConfigurationProfile>;
    async fn delete_configuration(&self, application: &str, environment: &str) -> CloudResult<()>;
}
