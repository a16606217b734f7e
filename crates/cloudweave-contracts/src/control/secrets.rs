use std::collections::HashMap;

use async_trait::async_trait;
use cloudweave_core::models::secret::{RotationConfig, Secret, SecretValue};
use cloudweave_core::CloudResult;

/// Secret storage and rotation (spec §4.6).
///
/// `delete_secret(force=false)` enters a provider-defined pending-deletion
/// window rather than erasing the secret immediately; `force=true` purges
/// it on the spot. See [`crate::data::SecretsClient`] for the cached
/// runtime read path.
#[async_trait]
pub trait SecretsService: Send + Sync {
    async fn create_secret(&self, name: &str, value: SecretValue) -> CloudResult<Secret>;
    async fn get_secret_value(&self, name: &str) -> CloudResult<SecretValue>;
    async fn update_secret(&self, name: &str, value: SecretValue) -> CloudResult<Secret>;
    async fn delete_secret(&self, name: &str, force: bool) -> CloudResult<()>;
    async fn list_secrets(&self) -> CloudResult<Vec<Secret>>;

    async fn rotate_secret(&self, name: &str, config: RotationConfig) -> CloudResult<Secret>;
    async fn tag_secret(&self, name: &str, tags: HashMap<String, String>) -> CloudResult<Secret>;
}
