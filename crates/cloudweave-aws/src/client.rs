//! Builds one shared [`aws_config::SdkConfig`] from a [`ProviderConfig`],
//! the only place in this crate that translates our credential/region model
//! into the AWS SDK's own types.

use aws_config::BehaviorVersion;
use cloudweave_core::models::provider_config::ProviderConfig;

pub async fn build_sdk_config(config: &ProviderConfig) -> aws_config::SdkConfig {
    let mut builder = aws_config::defaults(BehaviorVersion::latest());

    if let Some(region) = &config.region {
        builder = builder.region(aws_config::Region::new(region.clone()));
    }
    if let Some(endpoint) = &config.options.endpoint {
        builder = builder.endpoint_url(endpoint.clone());
    }
    if let Some(creds) = &config.credentials {
        builder = builder.credentials_provider(aws_sdk_s3::config::Credentials::new(
            &creds.access_key_id,
            &creds.secret_access_key,
            None,
            None,
            "cloudweave",
        ));
    }

    builder.load().await
}
