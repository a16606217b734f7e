use async_trait::async_trait;
use cloudweave_core::models::data_store::{ConnectionHandle, ExecuteResult, Row};
use cloudweave_core::CloudResult;

/// Runtime query/execute/transaction against a provisioned relational data
/// store (spec §4.7). Table administration lives on
/// [`crate::control::DataStoreService`].
///
/// Parameterization is mandatory: `params` are bound positionally by the
/// adapter, never concatenated into `sql`.
#[async_trait]
pub trait DataClient: Send + Sync {
    async fn query(&self, sql: &str, params: &[serde_json::Value]) -> CloudResult<Vec<Row>>;
    async fn execute(&self, sql: &str, params: &[serde_json::Value]) -> CloudResult<ExecuteResult>;

    /// Runs `ops` against a single connection inside one transaction —
    /// all committed together, or none at all on error.
    async fn transaction(
        &self,
        ops: Vec<(String, Vec<serde_json::Value>)>,
    ) -> CloudResult<Vec<ExecuteResult>>;

    /// Acquires a scoped connection from the shared pool; the caller
    /// releases it by dropping the handle or calling `release_connection`.
    async fn get_connection(&self) -> CloudResult<ConnectionHandle>;
    async fn release_connection(&self, handle: ConnectionHandle) -> CloudResult<()>;
}
