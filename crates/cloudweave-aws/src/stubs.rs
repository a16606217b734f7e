//! Adapters for the fourteen control/data contracts outside this crate's
//! representative subset. Each is real and constructible — it registers
//! and type-checks like any other adapter — but every operation returns
//! `ServiceUnavailableError` until a concrete AWS backing is wired in.
//! `ConfigurationService::validate_configuration` is the one exception: it
//! never touches stored configuration, so it's backed by the same
//! `SchemaValidator` every other adapter would use.

use async_trait::async_trait;
use cloudweave_contracts::control::{
    BatchService, CacheService, ConfigurationService, ContainerRepoService, DataStoreService,
    DocumentStoreService, FunctionHostingService, WebHostingService,
};
use cloudweave_contracts::data::{CacheClient, ConfigClient, ContainerRepoClient, DataClient, DocumentClient};
use cloudweave_core::models::cache_cluster::{CacheCluster, CacheSecurityConfig, CreateCacheClusterParams};
use cloudweave_core::models::configuration::{Configuration, ConfigurationProfile};
use cloudweave_core::models::container_repo::{ContainerImage, LifecyclePolicy, Repository};
use cloudweave_core::models::data_store::{ConnectionHandle, ExecuteResult, Migration, Row};
use cloudweave_core::models::deployment::{DeployApplicationParams, Deployment, ScaleParams, UpdateApplicationParams};
use cloudweave_core::models::document::{Document, DocumentQuery, PutDocumentParams};
use cloudweave_core::models::function::{
    CreateFunctionParams, EventSourceMapping, FunctionUrlAuthType, FunctionUrlConfig, InvocationResult,
    InvokeParams, ServerlessFunction, UpdateFunctionParams,
};
use cloudweave_core::models::job::{Job, JobStatus, ScheduledJob, SubmitJobParams};
use cloudweave_core::{CloudError, CloudResult};
use cloudweave_reliability::validator::{SchemaValidator, ValidationOutcome};

fn unavailable(service: &str) -> CloudError {
    CloudError::service_unavailable(format!("{service} has no AWS adapter wired into cloudweave-aws yet"))
}

pub struct WebHostingStub;
#[async_trait]
impl WebHostingService for WebHostingStub {
    async fn deploy_application(&self, _: DeployApplicationParams) -> CloudResult<Deployment> {
        Err(unavailable("WebHostingService"))
    }
    async fn get_deployment(&self, _: &str) -> CloudResult<Deployment> {
        Err(unavailable("WebHostingService"))
    }
    async fn update_application(&self, _: &str, _: UpdateApplicationParams) -> CloudResult<Deployment> {
        Err(unavailable("WebHostingService"))
    }
    async fn delete_application(&self, _: &str) -> CloudResult<()> {
        Err(unavailable("WebHostingService"))
    }
    async fn get_application_url(&self, _: &str) -> CloudResult<String> {
        Err(unavailable("WebHostingService"))
    }
    async fn scale_application(&self, _: &str, _: ScaleParams) -> CloudResult<Deployment> {
        Err(unavailable("WebHostingService"))
    }
}

pub struct FunctionHostingStub;
#[async_trait]
impl FunctionHostingService for FunctionHostingStub {
    async fn create_function(&self, _: CreateFunctionParams) -> CloudResult<ServerlessFunction> {
        Err(unavailable("FunctionHostingService"))
    }
    async fn get_function(&self, _: &str) -> CloudResult<ServerlessFunction> {
        Err(unavailable("FunctionHostingService"))
    }
    async fn update_function(&self, _: &str, _: UpdateFunctionParams) -> CloudResult<ServerlessFunction> {
        Err(unavailable("FunctionHostingService"))
    }
    async fn delete_function(&self, _: &str) -> CloudResult<()> {
        Err(unavailable("FunctionHostingService"))
    }
    async fn list_functions(&self) -> CloudResult<Vec<ServerlessFunction>> {
        Err(unavailable("FunctionHostingService"))
    }
    async fn invoke_function(&self, _: &str, _: InvokeParams) -> CloudResult<InvocationResult> {
        Err(unavailable("FunctionHostingService"))
    }
    async fn create_event_source_mapping(&self, _: &str, _: &str, _: u32) -> CloudResult<EventSourceMapping> {
        Err(unavailable("FunctionHostingService"))
    }
    async fn set_event_source_mapping_enabled(&self, _: &str, _: bool) -> CloudResult<()> {
        Err(unavailable("FunctionHostingService"))
    }
    async fn delete_event_source_mapping(&self, _: &str) -> CloudResult<()> {
        Err(unavailable("FunctionHostingService"))
    }
    async fn list_event_source_mappings(&self, _: &str) -> CloudResult<Vec<EventSourceMapping>> {
        Err(unavailable("FunctionHostingService"))
    }
    async fn create_function_url(&self, _: &str, _: FunctionUrlAuthType) -> CloudResult<FunctionUrlConfig> {
        Err(unavailable("FunctionHostingService"))
    }
    async fn get_function_url(&self, _: &str) -> CloudResult<FunctionUrlConfig> {
        Err(unavailable("FunctionHostingService"))
    }
    async fn delete_function_url(&self, _: &str) -> CloudResult<()> {
        Err(unavailable("FunctionHostingService"))
    }
}

pub struct BatchStub;
#[async_trait]
impl BatchService for BatchStub {
    async fn submit_job(&self, _: SubmitJobParams) -> CloudResult<Job> {
        Err(unavailable("BatchService"))
    }
    async fn get_job(&self, _: &str) -> CloudResult<Job> {
        Err(unavailable("BatchService"))
    }
    async fn cancel_job(&self, _: &str) -> CloudResult<Job> {
        Err(unavailable("BatchService"))
    }
    async fn list_jobs(&self, _: Option<JobStatus>) -> CloudResult<Vec<Job>> {
        Err(unavailable("BatchService"))
    }
    async fn schedule_job(&self, _: &str, _: &str, _: SubmitJobParams) -> CloudResult<ScheduledJob> {
        Err(unavailable("BatchService"))
    }
    async fn delete_scheduled_job(&self, _: &str) -> CloudResult<()> {
        Err(unavailable("BatchService"))
    }
    async fn list_scheduled_jobs(&self) -> CloudResult<Vec<ScheduledJob>> {
        Err(unavailable("BatchService"))
    }
}

pub struct ConfigurationStub;
#[async_trait]
impl ConfigurationService for ConfigurationStub {
    async fn validate_configuration(
        &self,
        content: &serde_json::Value,
        schema: &serde_json::Value,
    ) -> CloudResult<ValidationOutcome> {
        let validator = SchemaValidator::compile(schema).map_err(CloudError::validation)?;
        Ok(validator.validate(content))
    }
    async fn create_configuration(
        &self,
        _: &str,
        _: &str,
        _: serde_json::Value,
        _: Option<String>,
    ) -> CloudResult<Configuration> {
        Err(unavailable("ConfigurationService"))
    }
    async fn get_configuration(&self, _: &str, _: &str, _: Option<u32>) -> CloudResult<Configuration> {
        Err(unavailable("ConfigurationService"))
    }
    async fn deploy_configuration(&self, _: &str, _: &str, _: u32) -> CloudResult<Configuration> {
        Err(unavailable("ConfigurationService"))
    }
    async fn list_configuration_versions(&self, _: &str, _: &str) -> CloudResult<ConfigurationProfile> {
        Err(unavailable("ConfigurationService"))
    }
    async fn delete_configuration(&self, _: &str, _: &str) -> CloudResult<()> {
        Err(unavailable("ConfigurationService"))
    }
}

#[async_trait]
impl ConfigClient for ConfigurationStub {
    async fn get_active_configuration(&self, _: &str, _: &str) -> CloudResult<serde_json::Value> {
        Err(unavailable("ConfigClient"))
    }
}

pub struct DocumentStoreStub;
#[async_trait]
impl DocumentStoreService for DocumentStoreStub {
    async fn create_collection(&self, _: &str) -> CloudResult<()> {
        Err(unavailable("DocumentStoreService"))
    }
    async fn delete_collection(&self, _: &str) -> CloudResult<()> {
        Err(unavailable("DocumentStoreService"))
    }
    async fn list_collections(&self) -> CloudResult<Vec<String>> {
        Err(unavailable("DocumentStoreService"))
    }
}
#[async_trait]
impl DocumentClient for DocumentStoreStub {
    async fn put_document(&self, _: PutDocumentParams) -> CloudResult<Document> {
        Err(unavailable("DocumentClient"))
    }
    async fn get_document(&self, _: &str, _: &str) -> CloudResult<Document> {
        Err(unavailable("DocumentClient"))
    }
    async fn delete_document(&self, _: &str, _: &str) -> CloudResult<()> {
        Err(unavailable("DocumentClient"))
    }
    async fn query_documents(&self, _: DocumentQuery) -> CloudResult<Vec<Document>> {
        Err(unavailable("DocumentClient"))
    }
}

pub struct DataStoreStub;
#[async_trait]
impl DataStoreService for DataStoreStub {
    async fn connect(&self, _: Option<&str>) -> CloudResult<()> {
        Err(unavailable("DataStoreService"))
    }
    async fn query(&self, _: &str, _: &[serde_json::Value]) -> CloudResult<Vec<Row>> {
        Err(unavailable("DataStoreService"))
    }
    async fn execute(&self, _: &str, _: &[serde_json::Value]) -> CloudResult<ExecuteResult> {
        Err(unavailable("DataStoreService"))
    }
    async fn transaction(&self, _: Vec<(String, Vec<serde_json::Value>)>) -> CloudResult<Vec<ExecuteResult>> {
        Err(unavailable("DataStoreService"))
    }
    async fn migrate(&self, _: Vec<Migration>) -> CloudResult<()> {
        Err(unavailable("DataStoreService"))
    }
    async fn get_connection(&self) -> CloudResult<ConnectionHandle> {
        Err(unavailable("DataStoreService"))
    }
}
#[async_trait]
impl DataClient for DataStoreStub {
    async fn query(&self, _: &str, _: &[serde_json::Value]) -> CloudResult<Vec<Row>> {
        Err(unavailable("DataClient"))
    }
    async fn execute(&self, _: &str, _: &[serde_json::Value]) -> CloudResult<ExecuteResult> {
        Err(unavailable("DataClient"))
    }
    async fn transaction(&self, _: Vec<(String, Vec<serde_json::Value>)>) -> CloudResult<Vec<ExecuteResult>> {
        Err(unavailable("DataClient"))
    }
    async fn get_connection(&self) -> CloudResult<ConnectionHandle> {
        Err(unavailable("DataClient"))
    }
    async fn release_connection(&self, _: ConnectionHandle) -> CloudResult<()> {
        Err(unavailable("DataClient"))
    }
}

pub struct CacheStub;
#[async_trait]
impl CacheService for CacheStub {
    async fn create_cluster(&self, _: CreateCacheClusterParams) -> CloudResult<CacheCluster> {
        Err(unavailable("CacheService"))
    }
    async fn get_cluster(&self, _: &str) -> CloudResult<CacheCluster> {
        Err(unavailable("CacheService"))
    }
    async fn delete_cluster(&self, _: &str) -> CloudResult<()> {
        Err(unavailable("CacheService"))
    }
    async fn list_clusters(&self) -> CloudResult<Vec<CacheCluster>> {
        Err(unavailable("CacheService"))
    }
    async fn update_security_config(&self, _: &str, _: CacheSecurityConfig) -> CloudResult<CacheCluster> {
        Err(unavailable("CacheService"))
    }
    async fn flush_cluster(&self, _: &str) -> CloudResult<()> {
        Err(unavailable("CacheService"))
    }
}
#[async_trait]
impl CacheClient for CacheStub {
    async fn get(&self, _: &str, _: &str) -> CloudResult<Option<String>> {
        Err(unavailable("CacheClient"))
    }
    async fn set(&self, _: &str, _: &str, _: &str, _: Option<u64>) -> CloudResult<()> {
        Err(unavailable("CacheClient"))
    }
    async fn delete(&self, _: &str, _: &str) -> CloudResult<()> {
        Err(unavailable("CacheClient"))
    }
    async fn increment(&self, _: &str, _: &str, _: i64) -> CloudResult<i64> {
        Err(unavailable("CacheClient"))
    }
    async fn mget(&self, _: &str, _: &[String]) -> CloudResult<Vec<Option<String>>> {
        Err(unavailable("CacheClient"))
    }
    async fn mset(&self, _: &str, _: &[(String, String)]) -> CloudResult<()> {
        Err(unavailable("CacheClient"))
    }
    async fn expire(&self, _: &str, _: &str, _: u64) -> CloudResult<()> {
        Err(unavailable("CacheClient"))
    }
    async fn ttl(&self, _: &str, _: &str) -> CloudResult<Option<u64>> {
        Err(unavailable("CacheClient"))
    }
}

pub struct ContainerRepoStub;
#[async_trait]
impl ContainerRepoService for ContainerRepoStub {
    async fn create_repository(&self, _: &str) -> CloudResult<Repository> {
        Err(unavailable("ContainerRepoService"))
    }
    async fn delete_repository(&self, _: &str) -> CloudResult<()> {
        Err(unavailable("ContainerRepoService"))
    }
    async fn list_repositories(&self) -> CloudResult<Vec<Repository>> {
        Err(unavailable("ContainerRepoService"))
    }
    async fn set_lifecycle_policy(&self, _: &str, _: LifecyclePolicy) -> CloudResult<()> {
        Err(unavailable("ContainerRepoService"))
    }
    async fn list_images(&self, _: &str) -> CloudResult<Vec<ContainerImage>> {
        Err(unavailable("ContainerRepoService"))
    }
    async fn delete_image(&self, _: &str, _: &str) -> CloudResult<()> {
        Err(unavailable("ContainerRepoService"))
    }
}
#[async_trait]
impl ContainerRepoClient for ContainerRepoStub {
    async fn list_images(&self, _: &str) -> CloudResult<Vec<ContainerImage>> {
        Err(unavailable("ContainerRepoClient"))
    }
    async fn get_image_by_tag(&self, _: &str, _: &str) -> CloudResult<ContainerImage> {
        Err(unavailable("ContainerRepoClient"))
    }
    async fn delete_images(&self, _: &str, _: &[String]) -> CloudResult<()> {
        Err(unavailable("ContainerRepoClient"))
    }
    async fn image_exists(&self, _: &str, _: &str) -> CloudResult<bool> {
        Err(unavailable("ContainerRepoClient"))
    }
}
