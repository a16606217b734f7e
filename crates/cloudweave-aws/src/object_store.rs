//! S3-backed [`ObjectStoreService`]/[`ObjectClient`] adapter: the usual
//! `.into_service_error()` mapping, ETag-based put/copy, and a
//! continuation-token list loop.

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{BucketVersioningStatus, ServerSideEncryption, VersioningConfiguration};
use cloudweave_contracts::control::ObjectStoreService;
use cloudweave_contracts::data::ObjectClient;
use cloudweave_core::models::object_store::{
    BucketOptions, ObjectData, ObjectInfo, ObjectMetadata, ObjectRef, PutObjectParams,
};
use cloudweave_core::{CloudError, CloudResult};

pub struct AwsObjectStore {
    client: aws_sdk_s3::Client,
}

impl AwsObjectStore {
    pub fn new(client: aws_sdk_s3::Client) -> Self {
        Self { client }
    }
}

fn to_timestamp(dt: Option<&aws_smithy_types::DateTime>) -> jiff::Timestamp {
    dt.and_then(|dt| jiff::Timestamp::from_second(dt.secs()).ok())
        .unwrap_or_else(jiff::Timestamp::now)
}

#[async_trait]
impl ObjectStoreService for AwsObjectStore {
    async fn create_bucket(&self, name: &str, options: BucketOptions) -> CloudResult<()> {
        self.client
            .create_bucket()
            .bucket(name)
            .send()
            .await
            .map_err(|e| CloudError::service_unavailable(e.into_service_error().to_string()))?;

        if options.versioning {
            self.client
                .put_bucket_versioning()
                .bucket(name)
                .versioning_configuration(
                    VersioningConfiguration::builder()
                        .status(BucketVersioningStatus::Enabled)
                        .build(),
                )
                .send()
                .await
                .map_err(|e| CloudError::service_unavailable(e.into_service_error().to_string()))?;
        }
        if options.encryption {
            use aws_sdk_s3::types::{
                ServerSideEncryptionByDefault, ServerSideEncryptionConfiguration, ServerSideEncryptionRule,
            };
            self.client
                .put_bucket_encryption()
                .bucket(name)
                .server_side_encryption_configuration(
                    ServerSideEncryptionConfiguration::builder()
                        .rules(
                            ServerSideEncryptionRule::builder()
                                .apply_server_side_encryption_by_default(
                                    ServerSideEncryptionByDefault::builder()
                                        .sse_algorithm(ServerSideEncryption::Aes256)
                                        .build()
                                        .map_err(|e| CloudError::validation(e.to_string()))?,
                                )
                                .build(),
                        )
                        .build()
                        .map_err(|e| CloudError::validation(e.to_string()))?,
                )
                .send()
                .await
                .map_err(|e| CloudError::service_unavailable(e.into_service_error().to_string()))?;
        }
        Ok(())
    }

    async fn delete_bucket(&self, name: &str) -> CloudResult<()> {
        self.client
            .delete_bucket()
            .bucket(name)
            .send()
            .await
            .map(|_| ())
            .map_err(|e| CloudError::service_unavailable(e.into_service_error().to_string()))
    }

    async fn list_buckets(&self) -> CloudResult<Vec<String>> {
        let output = self
            .client
            .list_buckets()
            .send()
            .await
            .map_err(|e| CloudError::service_unavailable(e.into_service_error().to_string()))?;
        Ok(output
            .buckets()
            .iter()
            .filter_map(|b| b.name().map(str::to_string))
            .collect())
    }

    async fn put_object(&self, params: PutObjectParams) -> CloudResult<ObjectInfo> {
        ObjectClient::put_object(self, params).await
    }

    async fn get_object(&self, bucket: &str, key: &str) -> CloudResult<ObjectData> {
        ObjectClient::get_object(self, bucket, key).await
    }

    async fn delete_object(&self, bucket: &str, key: &str) -> CloudResult<()> {
        ObjectClient::delete_object(self, bucket, key).await
    }

    async fn list_objects(&self, bucket: &str, prefix: Option<&str>) -> CloudResult<Vec<ObjectInfo>> {
        ObjectClient::list_objects(self, bucket, prefix).await
    }

    async fn generate_presigned_url(
        &self,
        bucket: &str,
        key: &str,
        expires_in_seconds: u64,
    ) -> CloudResult<String> {
        let presign_config = aws_sdk_s3::presigning::PresigningConfig::builder()
            .expires_in(std::time::Duration::from_secs(expires_in_seconds))
            .build()
            .map_err(|e| CloudError::validation(e.to_string()))?;
        let presigned = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .presigned(presign_config)
            .await
            .map_err(|e| CloudError::service_unavailable(e.into_service_error().to_string()))?;
        Ok(presigned.uri().to_string())
    }

    async fn copy_object(&self, src: ObjectRef, dst: ObjectRef) -> CloudResult<ObjectInfo> {
        let copy_source = format!("{}/{}", src.bucket, src.key);
        let output = self
            .client
            .copy_object()
            .bucket(&dst.bucket)
            .key(&dst.key)
            .copy_source(copy_source)
            .send()
            .await
            .map_err(|e| CloudError::service_unavailable(e.into_service_error().to_string()))?;
        let etag = output
            .copy_object_result()
            .and_then(|r| r.e_tag())
            .unwrap_or_default()
            .trim_matches('"')
            .to_string();
        Ok(ObjectInfo {
            bucket: dst.bucket,
            key: dst.key,
            etag,
            size: 0,
            last_modified: jiff::Timestamp::now(),
        })
    }
}

#[async_trait]
impl ObjectClient for AwsObjectStore {
    async fn put_object(&self, params: PutObjectParams) -> CloudResult<ObjectInfo> {
        let mut request = self
            .client
            .put_object()
            .bucket(&params.bucket)
            .key(&params.key)
            .body(ByteStream::from(params.body.clone()));
        if let Some(content_type) = &params.content_type {
            request = request.content_type(content_type);
        }
        let output = request
            .send()
            .await
            .map_err(|e| CloudError::service_unavailable(e.into_service_error().to_string()))?;
        Ok(ObjectInfo {
            bucket: params.bucket,
            key: params.key,
            etag: output.e_tag().unwrap_or_default().trim_matches('"').to_string(),
            size: params.body.len() as u64,
            last_modified: jiff::Timestamp::now(),
        })
    }

    async fn get_object(&self, bucket: &str, key: &str) -> CloudResult<ObjectData> {
        let output = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                let service_err = e.into_service_error();
                if service_err.is_no_such_key() {
                    CloudError::not_found("object", format!("{bucket}/{key}"))
                } else {
                    CloudError::service_unavailable(service_err.to_string())
                }
            })?;
        let etag = output.e_tag().unwrap_or_default().trim_matches('"').to_string();
        let content_type = output.content_type().map(str::to_string);
        let size = output.content_length().unwrap_or(0).max(0) as u64;
        let last_modified = to_timestamp(output.last_modified());
        let data = output
            .body
            .collect()
            .await
            .map_err(|e| CloudError::service_unavailable(e.to_string()))?
            .into_bytes()
            .to_vec();
        Ok(ObjectData {
            data,
            metadata: ObjectMetadata {
                content_type,
                etag,
                size,
                last_modified,
            },
        })
    }

    async fn delete_object(&self, bucket: &str, key: &str) -> CloudResult<()> {
        self.client
            .delete_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map(|_| ())
            .map_err(|e| CloudError::service_unavailable(e.into_service_error().to_string()))
    }

    async fn list_objects(&self, bucket: &str, prefix: Option<&str>) -> CloudResult<Vec<ObjectInfo>> {
        let mut objects = Vec::new();
        let mut continuation_token = None;
        loop {
            let mut request = self.client.list_objects_v2().bucket(bucket);
            if let Some(prefix) = prefix {
                request = request.prefix(prefix);
            }
            if let Some(token) = &continuation_token {
                request = request.continuation_token(token);
            }
            let output = request
                .send()
                .await
                .map_err(|e| CloudError::service_unavailable(e.into_service_error().to_string()))?;
            for object in output.contents() {
                objects.push(ObjectInfo {
                    bucket: bucket.to_string(),
                    key: object.key().unwrap_or_default().to_string(),
                    etag: object.e_tag().unwrap_or_default().trim_matches('"').to_string(),
                    size: object.size().unwrap_or(0).max(0) as u64,
                    last_modified: to_timestamp(object.last_modified()),
                });
            }
            continuation_token = output.next_continuation_token().map(str::to_string);
            if continuation_token.is_none() {
                break;
            }
        }
        Ok(objects)
    }
}
