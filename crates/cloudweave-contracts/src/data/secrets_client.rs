use async_trait::async_trait;
use cloudweave_core::models::secret::SecretValue;
use cloudweave_core::CloudResult;

/// Runtime secret reads (spec §4.7). A secret in its pending-deletion
/// window raises `ResourceNotFoundError` here, same as if it never
/// existed.
#[async_trait]
pub trait SecretsClient: Send + Sync {
    async fn get_secret_value(&self, name: &str) -> CloudResult<SecretValue>;
    async fn get_secret_value_version(&self, name: &str, version: u32) -> CloudResult<SecretValue>;
}
