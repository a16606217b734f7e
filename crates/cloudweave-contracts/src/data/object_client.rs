use async_trait::async_trait;
use cloudweave_core::models::object_store::{ObjectData, ObjectInfo, PutObjectParams};
use cloudweave_core::CloudResult;

/// Runtime object read/write against an already-provisioned bucket
/// (spec §4.7).
#[async_trait]
pub trait ObjectClient: Send + Sync {
    async fn put_object(&self, params: PutObjectParams) -> CloudResult<ObjectInfo>;
    async fn get_object(&self, bucket: &str, key: &str) -> CloudResult<ObjectData>;
    async fn delete_object(&self, bucket: &str, key: &str) -> CloudResult<()>;
    async fn list_objects(&self, bucket: &str, prefix: Option<&str>) -> CloudResult<Vec<ObjectInfo>>;
}
