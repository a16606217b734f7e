use async_trait::async_trait;
use cloudweave_core::models::function::{
    CreateFunctionParams, EventSourceMapping, FunctionUrlAuthType, FunctionUrlConfig,
    InvocationResult, InvokeParams, ServerlessFunction, UpdateFunctionParams,
};
use cloudweave_core::CloudResult;

/// Manages serverless functions and their triggers (spec §4.6).
#[async_trait]
pub trait FunctionHostingService: Send + Sync {
    async fn create_function(&self, params: CreateFunctionParams) -> CloudResult<ServerlessFunction>;
    async fn get_function(&self, name: &str) -> CloudResult<ServerlessFunction>;
    async fn update_function(
        &self,
        name: &str,
        params: UpdateFunctionParams,
    ) -> CloudResult<ServerlessFunction>;
    async fn delete_function(&self, name: &str) -> CloudResult<()>;
    async fn list_functions(&self) -> CloudResult<Vec<ServerlessFunction>>;

    /// `invocation_type` governs whether the payload is awaited.
    async fn invoke_function(
        &self,
        name: &str,
        params: InvokeParams,
    ) -> CloudResult<InvocationResult>;

    async fn create_event_source_mapping(
        &self,
        function_name: &str,
        event_source_arn: &str,
        batch_size: u32,
    ) -> CloudResult<EventSourceMapping>;
    async fn set_event_source_mapping_enabled(&self, id: &str, enabled: bool) -> CloudResult<()>;
    async fn delete_event_source_mapping(&self, id: &str) -> CloudResult<()>;
    async fn list_event_source_mappings(
        &self,
        function_name: &str,
    ) -> CloudResult<Vec<EventSourceMapping>>;

    async fn create_function_url(
        &self,
        function_name: &str,
        auth_type: FunctionUrlAuthType,
    ) -> CloudResult<FunctionUrlConfig>;
    async fn get_function_url(&self, function_name: &str) -> CloudResult<FunctionUrlConfig>;
    async fn delete_function_url(&self, function_name: &str) -> CloudResult<()>;
}
