use async_trait::async_trait;
use cloudweave_core::CloudResult;

/// Collection-level administration for the document store (spec §4.6).
/// Item CRUD lives on [`crate::data::DocumentClient`].
#[async_trait]
pub trait DocumentStoreService: Send + Sync {
    async fn create_collection(&self, name: &str) -> CloudResult<()>;
    async fn delete_collection(&self, name: &str) -> CloudResult<()>;
    async fn list_collections(&self) -> CloudResult<Vec<String>>;
}
