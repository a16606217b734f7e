use std::sync::Arc;

use async_trait::async_trait;
use cloudweave_contracts::control::FunctionHostingService;
use cloudweave_core::models::function::{
    CreateFunctionParams, EventSourceMapping, FunctionStatus, FunctionUrlAuthType,
    FunctionUrlConfig, InvocationResult, InvocationType, InvokeParams, ServerlessFunction,
    UpdateFunctionParams,
};
use cloudweave_core::{CloudError, CloudResult};

use crate::world::World;

pub struct MockFunctionHosting {
    world: Arc<World>,
}

impl MockFunctionHosting {
    pub fn new(world: Arc<World>) -> Self {
        Self { world }
    }
}

#[async_trait]
impl FunctionHostingService for MockFunctionHosting {
    async fn create_function(&self, params: CreateFunctionParams) -> CloudResult<ServerlessFunction> {
        self.world.latency.apply().await;
        let mut functions = self.world.functions.lock().await;
        if functions.contains_key(&params.name) {
            return Err(CloudError::conflict(format!(
                "function '{}' already exists",
                params.name
            )));
        }
        let now = jiff::Timestamp::now();
        let function = ServerlessFunction {
            name: params.name.clone(),
            arn: Some(format!("mock:function:{}", params.name)),
            runtime: params.runtime,
            handler: params.handler,
            status: FunctionStatus::Active,
            memory_size: params.memory_size,
            timeout: params.timeout,
            environment: params.environment,
            code_size: params.code.len() as u64,
            version: "1".to_string(),
            created: now,
            last_updated: now,
        };
        functions.insert(params.name, function.clone());
        Ok(function)
    }

    async fn get_function(&self, name: &str) -> CloudResult<ServerlessFunction> {
        self.world.latency.apply().await;
        self.world
            .functions
            .lock()
            .await
            .get(name)
            .cloned()
            .ok_or_else(|| CloudError::not_found("function", name))
    }

    async fn update_function(
        &self,
        name: &str,
        params: UpdateFunctionParams,
    ) -> CloudResult<ServerlessFunction> {
        self.world.latency.apply().await;
        let mut functions = self.world.functions.lock().await;
        let function = functions
            .get_mut(name)
            .ok_or_else(|| CloudError::not_found("function", name))?;
        if let Some(code) = params.code {
            function.code_size = code.len() as u64;
        }
        if let Some(handler) = params.handler {
            function.handler = handler;
        }
        if let Some(memory_size) = params.memory_size {
            function.memory_size = memory_size;
        }
        if let Some(timeout) = params.timeout {
            function.timeout = timeout;
        }
        if let Some(environment) = params.environment {
            function.environment = environment;
        }
        function.version = (function.version.parse::<u32>().unwrap_or(1) + 1).to_string();
        function.last_updated = jiff::Timestamp::now();
        Ok(function.clone())
    }

    async fn delete_function(&self, name: &str) -> CloudResult<()> {
        self.world.latency.apply().await;
        self.world
            .functions
            .lock()
            .await
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| CloudError::not_found("function", name))
    }

    async fn list_functions(&self) -> CloudResult<Vec<ServerlessFunction>> {
        self.world.latency.apply().await;
        Ok(self.world.functions.lock().await.values().cloned().collect())
    }

    async fn invoke_function(
        &self,
        name: &str,
        params: InvokeParams,
    ) -> CloudResult<InvocationResult> {
        self.world.latency.apply().await;
        let functions = self.world.functions.lock().await;
        let function = functions
            .get(name)
            .ok_or_else(|| CloudError::not_found("function", name))?;

        match params.invocation_type {
            InvocationType::DryRun => Ok(InvocationResult {
                status_code: 204,
                payload: None,
                executed_version: Some(function.version.clone()),
                function_error: None,
                log_result: None,
            }),
            InvocationType::Async => Ok(InvocationResult {
                status_code: 202,
                payload: None,
                executed_version: Some(function.version.clone()),
                function_error: None,
                log_result: None,
            }),
            InvocationType::Sync => Ok(InvocationResult {
                status_code: 200,
                payload: params.payload,
                executed_version: Some(function.version.clone()),
                function_error: None,
                log_result: Some("START RequestId: mock\nEND\n".to_string()),
            }),
        }
    }

    async fn create_event_source_mapping(
        &self,
        function_name: &str,
        event_source_arn: &str,
        batch_size: u32,
    ) -> CloudResult<EventSourceMapping> {
        self.world.latency.apply().await;
        if !self.world.functions.lock().await.contains_key(function_name) {
            return Err(CloudError::not_found("function", function_name));
        }
        let id = self.world.ids.next("esm").await;
        let mapping = EventSourceMapping {
            id: id.clone(),
            function_name: function_name.to_string(),
            event_source_arn: event_source_arn.to_string(),
            enabled: true,
            batch_size,
        };
        self.world
            .event_source_mappings
            .lock()
            .await
            .insert(id, mapping.clone());
        Ok(mapping)
    }

    async fn set_event_source_mapping_enabled(&self, id: &str, enabled: bool) -> CloudResult<()> {
        self.world.latency.apply().await;
        let mut mappings = self.world.event_source_mappings.lock().await;
        let mapping = mappings
            .get_mut(id)
            .ok_or_else(|| CloudError::not_found("event_source_mapping", id))?;
        mapping.enabled = enabled;
        Ok(())
    }

    async fn delete_event_source_mapping(&self, id: &str) -> CloudResult<()> {
        self.world.latency.apply().await;
        self.world
            .event_source_mappings
            .lock()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| CloudError::not_found("event_source_mapping", id))
    }

    async fn list_event_source_mappings(
        &self,
        function_name: &str,
    ) -> CloudResult<Vec<EventSourceMapping>> {
        self.world.latency.apply().await;
        Ok(self
            .world
            .event_source_mappings
            .lock()
            .await
            .values()
            .filter(|m| m.function_name == function_name)
            .cloned()
            .collect())
    }

    async fn create_function_url(
        &self,
        function_name: &str,
        auth_type: FunctionUrlAuthType,
    ) -> CloudResult<FunctionUrlConfig> {
        self.world.latency.apply().await;
        if !self.world.functions.lock().await.contains_key(function_name) {
            return Err(CloudError::not_found("function", function_name));
        }
        let config = FunctionUrlConfig {
            function_name: function_name.to_string(),
            url: format!("https://{function_name}.mock-function-url.local"),
            auth_type,
        };
        self.world
            .function_urls
            .lock()
            .await
            .insert(function_name.to_string(), config.clone());
        Ok(config)
    }

    async fn get_function_url(&self, function_name: &str) -> CloudResult<FunctionUrlConfig> {
        self.world.latency.apply().await;
        self.world
            .function_urls
            .lock()
            .await
            .get(function_name)
            .cloned()
            .ok_or_else(|| CloudError::not_found("function_url", function_name))
    }

    async fn delete_function_url(&self, function_name: &str) -> CloudResult<()> {
        self.world.latency.apply().await;
        self.world
            .function_urls
            .lock()
            .await
            .remove(function_name)
            .map(|_| ())
            .ok_or_else(|| CloudError::not_found("function_url", function_name))
    }
}
