use async_trait::async_trait;
use cloudweave_core::models::document::{Document, DocumentQuery, PutDocumentParams};
use cloudweave_core::CloudResult;

/// Runtime item CRUD and filtered query against a document collection
/// (spec §4.7).
///
/// `put_document` with `expected_etag` set raises `ConflictError` if the
/// stored document's `etag` doesn't match.
#[async_trait]
pub trait DocumentClient: Send + Sync {
    async fn put_document(&self, params: PutDocumentParams) -> CloudResult<Document>;
    async fn get_document(&self, collection: &str, key: &str) -> CloudResult<Document>;
    async fn delete_document(&self, collection: &str, key: &str) -> CloudResult<()>;
    async fn query_documents(&self, query: DocumentQuery) -> CloudResult<Vec<Document>>;
}
