use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Selects a provider, its credentials, and per-service options (spec §6.1).
///
/// Immutable once a facade is constructed from it — the factory reads it
/// exactly once, at adapter-construction time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub provider: ProviderKind,
    pub region: Option<String>,
    pub credentials: Option<Credentials>,
    #[serde(default)]
    pub options: ProviderOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Aws,
    Mock,
    Azure,
    Gcp,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub access_key_id: String,
    pub secret_access_key: String,
}

/// Typed, known option fields plus a raw escape hatch for unknown keys
/// (spec §9's "replace the free-form options map with a typed struct ...
/// still expose a raw escape hatch").
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderOptions {
    pub endpoint: Option<String>,
    pub db_host: Option<String>,
    pub db_port: Option<u16>,
    pub db_name: Option<String>,
    pub db_user: Option<String>,
    pub db_password: Option<String>,
    pub user_pool_id: Option<String>,
    pub user_pool_client_id: Option<String>,
    pub user_pool_domain: Option<String>,
    pub user_pool_region: Option<String>,
    pub ses_from_address: Option<String>,
    pub batch_job_queue: Option<String>,
    pub batch_job_definition: Option<String>,
    pub app_config_application: Option<String>,
    pub cache_capacity: Option<usize>,
    pub cache_default_ttl_secs: Option<u64>,
    pub retry_max_attempts: Option<u32>,
    pub retry_base_delay_ms: Option<u64>,
    pub retry_max_delay_ms: Option<u64>,
    pub retry_jitter: Option<bool>,
    pub account_id: Option<String>,
    #[serde(default)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl ProviderConfig {
    pub fn new(provider: ProviderKind) -> Self {
        Self {
            provider,
            region: None,
            credentials: None,
            options: ProviderOptions::default(),
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_credentials(mut self, access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        self.credentials = Some(Credentials {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
        });
        self
    }

    /// Load a config from the environment fallbacks in spec §6.1. Explicit
    /// fields set before this is called are never overwritten; this only
    /// fills in what's still `None`.
    pub fn from_env(mut self) -> Self {
        if self.region.is_none() {
            self.region = std::env::var("LC_PLATFORM_REGION")
                .ok()
                .or_else(|| std::env::var("AWS_REGION").ok());
        }
        if self.options.db_host.is_none() {
            self.options.db_host = std::env::var("DB_HOST").ok();
        }
        if self.options.db_port.is_none() {
            self.options.db_port = std::env::var("DB_PORT").ok().and_then(|v| v.parse().ok());
        }
        if self.options.db_name.is_none() {
            self.options.db_name = std::env::var("DB_NAME").ok();
        }
        if self.options.db_user.is_none() {
            self.options.db_user = std::env::var("DB_USER").ok();
        }
        if self.options.db_password.is_none() {
            self.options.db_password = std::env::var("DB_PASSWORD").ok();
        }
        if self.options.account_id.is_none() {
            self.options.account_id = std::env::var("AWS_ACCOUNT_ID").ok();
        }
        if self.options.user_pool_client_id.is_none() {
            self.options.user_pool_client_id = std::env::var("COGNITO_CLIENT_ID").ok();
        }
        if self.options.ses_from_address.is_none() {
            self.options.ses_from_address = std::env::var("SES_FROM_ADDRESS").ok();
        }
        self
    }

    /// `provider` itself, honoring `LC_PLATFORM_PROVIDER` when no explicit
    /// provider was requested by the caller's own config construction.
    pub fn provider_from_env(default: ProviderKind) -> ProviderKind {
        match std::env::var("LC_PLATFORM_PROVIDER").ok().as_deref() {
            Some("aws") => ProviderKind::Aws,
            Some("mock") => ProviderKind::Mock,
            Some("azure") => ProviderKind::Azure,
            Some("gcp") => ProviderKind::Gcp,
            _ => default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_fields_are_not_overwritten_by_env() {
        let config = ProviderConfig::new(ProviderKind::Aws)
            .with_region("us-west-2")
            .from_env();
        assert_eq!(config.region.as_deref(), Some("us-west-2"));
    }
}
