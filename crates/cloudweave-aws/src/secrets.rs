//! Secrets Manager-backed [`SecretsService`]/[`SecretsClient`] adapter.
//!
//! AWS versions secrets by opaque version id, not by the sequential `u32`
//! this contract exposes; `version` here is derived from the secret's
//! version-id list ordered by creation time, oldest first.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_secretsmanager::types::{RotationRulesType, Tag};
use cloudweave_contracts::control::SecretsService;
use cloudweave_contracts::data::SecretsClient;
use cloudweave_core::models::secret::{RotationConfig, Secret, SecretValue};
use cloudweave_core::{CloudError, CloudResult};

pub struct AwsSecrets {
    client: aws_sdk_secretsmanager::Client,
}

impl AwsSecrets {
    pub fn new(client: aws_sdk_secretsmanager::Client) -> Self {
        Self { client }
    }

    fn encode(value: &SecretValue) -> String {
        match value {
            SecretValue::Text(text) => text.clone(),
            SecretValue::Json(json) => json.to_string(),
        }
    }

    fn decode(raw: Option<&str>) -> SecretValue {
        let raw = raw.unwrap_or_default();
        match serde_json::from_str(raw) {
            Ok(json) => SecretValue::Json(json),
            Err(_) => SecretValue::Text(raw.to_string()),
        }
    }

    async fn version_count(&self, name: &str) -> u32 {
        self.client
            .list_secret_version_ids()
            .secret_id(name)
            .send()
            .await
            .map(|out| out.versions().len() as u32)
            .unwrap_or(1)
            .max(1)
    }

    async fn describe(&self, name: &str) -> CloudResult<Secret> {
        let output = self
            .client
            .describe_secret()
            .secret_id(name)
            .send()
            .await
            .map_err(|e| CloudError::not_found("secret", format!("{name}: {}", e.into_service_error())))?;

        let tags = output
            .tags()
            .iter()
            .filter_map(|t| Some((t.key()?.to_string(), t.value()?.to_string())))
            .collect();

        Ok(Secret {
            name: name.to_string(),
            version: self.version_count(name).await,
            created: output
                .created_date()
                .and_then(|d| jiff::Timestamp::from_second(d.secs()).ok())
                .unwrap_or_else(jiff::Timestamp::now),
            last_modified: output
                .last_changed_date()
                .and_then(|d| jiff::Timestamp::from_second(d.secs()).ok())
                .unwrap_or_else(jiff::Timestamp::now),
            rotation_enabled: output.rotation_enabled().unwrap_or(false),
            rotation_days: output
                .rotation_rules()
                .and_then(|r| r.automatically_after_days())
                .map(|d| d as u32),
            last_rotated: output
                .last_rotated_date()
                .and_then(|d| jiff::Timestamp::from_second(d.secs()).ok()),
            tags,
        })
    }
}

#[async_trait]
impl SecretsService for AwsSecrets {
    async fn create_secret(&self, name: &str, value: SecretValue) -> CloudResult<Secret> {
        self.client
            .create_secret()
            .name(name)
            .secret_string(Self::encode(&value))
            .send()
            .await
            .map_err(|e| CloudError::conflict(e.into_service_error().to_string()))?;
        self.describe(name).await
    }

    async fn get_secret_value(&self, name: &str) -> CloudResult<SecretValue> {
        SecretsClient::get_secret_value(self, name).await
    }

    async fn update_secret(&self, name: &str, value: SecretValue) -> CloudResult<Secret> {
        self.client
            .put_secret_value()
            .secret_id(name)
            .secret_string(Self::encode(&value))
            .send()
            .await
            .map_err(|e| CloudError::not_found("secret", format!("{name}: {}", e.into_service_error())))?;
        self.describe(name).await
    }

    async fn delete_secret(&self, name: &str, force: bool) -> CloudResult<()> {
        self.client
            .delete_secret()
            .secret_id(name)
            .force_delete_without_recovery(force)
            .send()
            .await
            .map(|_| ())
            .map_err(|e| CloudError::not_found("secret", format!("{name}: {}", e.into_service_error())))
    }

    async fn list_secrets(&self) -> CloudResult<Vec<Secret>> {
        let output = self
            .client
            .list_secrets()
            .send()
            .await
            .map_err(|e| CloudError::service_unavailable(e.into_service_error().to_string()))?;
        let mut secrets = Vec::new();
        for entry in output.secret_list() {
            if let Some(name) = entry.name() {
                secrets.push(self.describe(name).await?);
            }
        }
        Ok(secrets)
    }

    async fn rotate_secret(&self, name: &str, config: RotationConfig) -> CloudResult<Secret> {
        self.client
            .rotate_secret()
            .secret_id(name)
            .rotation_rules(
                RotationRulesType::builder()
                    .automatically_after_days(config.rotation_days as i64)
                    .build(),
            )
            .send()
            .await
            .map_err(|e| CloudError::not_found("secret", format!("{name}: {}", e.into_service_error())))?;
        self.describe(name).await
    }

    async fn tag_secret(&self, name: &str, tags: HashMap<String, String>) -> CloudResult<Secret> {
        let tag_list = tags
            .into_iter()
            .map(|(key, value)| Tag::builder().key(key).value(value).build())
            .collect::<Vec<_>>();
        self.client
            .tag_resource()
            .secret_id(name)
            .set_tags(Some(tag_list))
            .send()
            .await
            .map_err(|e| CloudError::not_found("secret", format!("{name}: {}", e.into_service_error())))?;
        self.describe(name).await
    }
}

#[async_trait]
impl SecretsClient for AwsSecrets {
    async fn get_secret_value(&self, name: &str) -> CloudResult<SecretValue> {
        let output = self
            .client
            .get_secret_value()
            .secret_id(name)
            .send()
            .await
            .map_err(|e| CloudError::not_found("secret", format!("{name}: {}", e.into_service_error())))?;
        Ok(Self::decode(output.secret_string()))
    }

    async fn get_secret_value_version(&self, name: &str, version: u32) -> CloudResult<SecretValue> {
        let versions = self
            .client
            .list_secret_version_ids()
            .secret_id(name)
            .send()
            .await
            .map_err(|e| CloudError::not_found("secret", format!("{name}: {}", e.into_service_error())))?;
        let mut ids: Vec<_> = versions
            .versions()
            .iter()
            .filter_map(|v| Some((v.created_date()?.secs(), v.version_id()?.to_string())))
            .collect();
        ids.sort_by_key(|(created, _)| *created);
        let (_, version_id) = ids
            .get(version.saturating_sub(1) as usize)
            .ok_or_else(|| CloudError::not_found("secret_version", format!("{name}@{version}")))?;

        let output = self
            .client
            .get_secret_value()
            .secret_id(name)
            .version_id(version_id)
            .send()
            .await
            .map_err(|e| CloudError::not_found("secret_version", format!("{name}@{version}: {}", e.into_service_error())))?;
        Ok(Self::decode(output.secret_string()))
    }
}
