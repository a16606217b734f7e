use std::sync::Arc;

use async_trait::async_trait;
use cloudweave_contracts::control::ObjectStoreService;
use cloudweave_contracts::data::ObjectClient;
use cloudweave_core::models::object_store::{
    BucketOptions, ObjectData, ObjectInfo, ObjectMetadata, ObjectRef, PutObjectParams,
};
use cloudweave_core::{CloudError, CloudResult};
use uuid::Uuid;

use crate::world::World;

pub struct MockObjectStore {
    world: Arc<World>,
}

impl MockObjectStore {
    pub fn new(world: Arc<World>) -> Self {
        Self { world }
    }

    fn info_of(bucket: &str, key: &str, data: &ObjectData) -> ObjectInfo {
        ObjectInfo {
            bucket: bucket.to_string(),
            key: key.to_string(),
            etag: data.metadata.etag.clone(),
            size: data.metadata.size,
            last_modified: data.metadata.last_modified,
        }
    }
}

#[async_trait]
impl ObjectStoreService for MockObjectStore {
    async fn create_bucket(&self, name: &str, options: BucketOptions) -> CloudResult<()> {
        self.world.latency.apply().await;
        let mut buckets = self.world.buckets.lock().await;
        if buckets.contains_key(name) {
            return Err(CloudError::conflict(format!("bucket '{name}' already exists")));
        }
        buckets.insert(name.to_string(), options);
        Ok(())
    }

    async fn delete_bucket(&self, name: &str) -> CloudResult<()> {
        self.world.latency.apply().await;
        if !self.world.buckets.lock().await.remove(name).is_some() {
            return Err(CloudError::not_found("bucket", name));
        }
        self.world
            .objects
            .lock()
            .await
            .retain(|(bucket, _), _| bucket != name);
        Ok(())
    }

    async fn list_buckets(&self) -> CloudResult<Vec<String>> {
        self.world.latency.apply().await;
        Ok(self.world.buckets.lock().await.keys().cloned().collect())
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
        self.world.latency.apply().await;
        if !self.world.objects.lock().await.contains_key(&(bucket.to_string(), key.to_string())) {
            return Err(CloudError::not_found("object", format!("{bucket}/{key}")));
        }
        let token = self.world.ids.next("presigned").await;
        Ok(format!("mock://{bucket}/{key}?token={token}&expires={expires_in_seconds}"))
    }

    async fn copy_object(&self, src: ObjectRef, dst: ObjectRef) -> CloudResult<ObjectInfo> {
        self.world.latency.apply().await;
        let mut objects = self.world.objects.lock().await;
        let source = objects
            .get(&(src.bucket.clone(), src.key.clone()))
            .cloned()
            .ok_or_else(|| CloudError::not_found("object", format!("{}/{}", src.bucket, src.key)))?;
        let copied = ObjectData {
            data: source.data,
            metadata: ObjectMetadata {
                etag: Uuid::new_v4().to_string(),
                ..source.metadata
            },
        };
        let info = Self::info_of(&dst.bucket, &dst.key, &copied);
        objects.insert((dst.bucket, dst.key), copied);
        Ok(info)
    }
}

#[async_trait]
impl ObjectClient for MockObjectStore {
    async fn put_object(&self, params: PutObjectParams) -> CloudResult<ObjectInfo> {
        self.world.latency.apply().await;
        if !self.world.buckets.lock().await.contains_key(&params.bucket) {
            return Err(CloudError::not_found("bucket", &params.bucket));
        }
        let data = ObjectData {
            metadata: ObjectMetadata {
                content_type: params.content_type,
                etag: Uuid::new_v4().to_string(),
                size: params.body.len() as u64,
                last_modified: jiff::Timestamp::now(),
            },
            data: params.body,
        };
        let info = Self::info_of(&params.bucket, &params.key, &data);
        self.world
            .objects
            .lock()
            .await
            .insert((params.bucket, params.key), data);
        Ok(info)
    }

    async fn get_object(&self, bucket: &str, key: &str) -> CloudResult<ObjectData> {
        self.world.latency.apply().await;
        self.world
            .objects
            .lock()
            .await
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
            .ok_or_else(|| CloudError::not_found("object", format!("{bucket}/{key}")))
    }

    async fn delete_object(&self, bucket: &str, key: &str) -> CloudResult<()> {
        self.world.latency.apply().await;
        self.world
            .objects
            .lock()
            .await
            .remove(&(bucket.to_string(), key.to_string()))
            .map(|_| ())
            .ok_or_else(|| CloudError::not_found("object", format!("{bucket}/{key}")))
    }

    async fn list_objects(&self, bucket: &str, prefix: Option<&str>) -> CloudResult<Vec<ObjectInfo>> {
        self.world.latency.apply().await;
        Ok(self
            .world
            .objects
            .lock()
            .await
            .iter()
            .filter(|((b, key), _)| b == bucket && prefix.map_or(true, |p| key.starts_with(p)))
            .map(|((b, key), data)| Self::info_of(b, key, data))
            .collect())
    }
}
