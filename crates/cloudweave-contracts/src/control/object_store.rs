use async_trait::async_trait;
use cloudweave_core::models::object_store::{BucketOptions, ObjectData, ObjectInfo, ObjectRef, PutObjectParams};
use cloudweave_core::CloudResult;

/// Bucket administration plus object operations (spec §4.6). The same
/// put/get/delete/list surface is also exposed, runtime-only, through
/// [`crate::data::ObjectClient`] — this trait additionally owns bucket
/// lifecycle and presigned-URL/copy, which are management operations.
#[async_trait]
pub trait ObjectStoreService: Send + Sync {
    async fn create_bucket(&self, name: &str, options: BucketOptions) -> CloudResult<()>;
    async fn delete_bucket(&self, name: &str) -> CloudResult<()>;
    async fn list_buckets(&self) -> CloudResult<Vec<String>>;

    async fn put_object(&self, params: PutObjectParams) -> CloudResult<ObjectInfo>;
    async fn get_object(&self, bucket: &str, key: &str) -> CloudResult<ObjectData>;
    async fn delete_object(&self, bucket: &str, key: &str) -> CloudResult<()>;
    async fn list_objects(&self, bucket: &str, prefix: Option<&str>) -> CloudResult<Vec<ObjectInfo>>;

    async fn generate_presigned_url(
        &self,
        bucket: &str,
        key: &str,
        expires_in_seconds: u64,
    ) -> CloudResult<String>;
    async fn copy_object(&self, src: ObjectRef, dst: ObjectRef) -> CloudResult<ObjectInfo>;
}
