use std::sync::Arc;

use async_trait::async_trait;
use cloudweave_contracts::control::DocumentStoreService;
use cloudweave_contracts::data::DocumentClient;
use cloudweave_core::models::document::{Document, DocumentQuery, PutDocumentParams};
use cloudweave_core::{CloudError, CloudResult};
use uuid::Uuid;

use crate::world::World;

pub struct MockDocumentStore {
    world: Arc<World>,
}

impl MockDocumentStore {
    pub fn new(world: Arc<World>) -> Self {
        Self { world }
    }
}

#[async_trait]
impl DocumentStoreService for MockDocumentStore {
    async fn create_collection(&self, name: &str) -> CloudResult<()> {
        self.world.latency.apply().await;
        let mut collections = self.world.collections.lock().await;
        if !collections.insert(name.to_string()) {
            return Err(CloudError::conflict(format!("collection '{name}' already exists")));
        }
        Ok(())
    }

    async fn delete_collection(&self, name: &str) -> CloudResult<()> {
        self.world.latency.apply().await;
        if !self.world.collections.lock().await.remove(name) {
            return Err(CloudError::not_found("collection", name));
        }
        self.world
            .documents
            .lock()
            .await
            .retain(|(collection, _), _| collection != name);
        Ok(())
    }

    async fn list_collections(&self) -> CloudResult<Vec<String>> {
        self.world.latency.apply().await;
        Ok(self.world.collections.lock().await.iter().cloned().collect())
    }
}

#[async_trait]
impl DocumentClient for MockDocumentStore {
    async fn put_document(&self, params: PutDocumentParams) -> CloudResult<Document> {
        self.world.latency.apply().await;
        if !self.world.collections.lock().await.contains(&params.collection) {
            return Err(CloudError::not_found("collection", &params.collection));
        }
        let mut documents = self.world.documents.lock().await;
        let key = (params.collection.clone(), params.key.clone());
        if let Some(expected) = &params.expected_etag {
            match documents.get(&key) {
                Some(existing) if &existing.etag != expected => {
                    return Err(CloudError::conflict(format!(
                        "etag mismatch for document '{}/{}'",
                        params.collection, params.key
                    )));
                }
                None => {
                    return Err(CloudError::conflict(format!(
                        "document '{}/{}' does not exist yet",
                        params.collection, params.key
                    )));
                }
                _ => {}
            }
        }
        let document = Document {
            collection: params.collection,
            key: params.key,
            data: params.data,
            etag: Uuid::new_v4().to_string(),
        };
        documents.insert(key, document.clone());
        Ok(document)
    }

    async fn get_document(&self, collection: &str, key: &str) -> CloudResult<Document> {
        self.world.latency.apply().await;
        self.world
            .documents
            .lock()
            .await
            .get(&(collection.to_string(), key.to_string()))
            .cloned()
            .ok_or_else(|| CloudError::not_found("document", format!("{collection}/{key}")))
    }

    async fn delete_document(&self, collection: &str, key: &str) -> CloudResult<()> {
        self.world.latency.apply().await;
        self.world
            .documents
            .lock()
            .await
            .remove(&(collection.to_string(), key.to_string()))
            .map(|_| ())
            .ok_or_else(|| CloudError::not_found("document", format!("{collection}/{key}")))
    }

    async fn query_documents(&self, query: DocumentQuery) -> CloudResult<Vec<Document>> {
        self.world.latency.apply().await;
        Ok(self
            .world
            .documents
            .lock()
            .await
            .values()
            .filter(|d| d.collection == query.collection)
            .filter(|d| {
                query.filter.iter().all(|(k, v)| d.data.get(k) == Some(v))
            })
            .cloned()
            .collect())
    }
}
