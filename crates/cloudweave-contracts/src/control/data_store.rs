use async_trait::async_trait;
use cloudweave_core::models::data_store::{ConnectionHandle, ExecuteResult, Migration, Row};
use cloudweave_core::CloudResult;

/// Connection management and schema migration for the relational data
/// store (spec §4.6). Query/execute/transaction also live here — the
/// split against [`crate::data::DataClient`] is administrative: this
/// trait additionally owns `connect`/`migrate`/`getConnection`.
#[async_trait]
pub trait DataStoreService: Send + Sync {
    async fn connect(&self, connection_string: Option<&str>) -> CloudResult<()>;

    async fn query(&self, sql: &str, params: &[serde_json::Value]) -> CloudResult<Vec<Row>>;
    async fn execute(&self, sql: &str, params: &[serde_json::Value]) -> CloudResult<ExecuteResult>;
    async fn transaction(
        &self,
        ops: Vec<(String, Vec<serde_json::Value>)>,
    ) -> CloudResult<Vec<ExecuteResult>>;

    /// Applies `migrations` in ascending `version` order, skipping any
    /// version already recorded in the provider's own `migrations` table.
    async fn migrate(&self, migrations: Vec<Migration>) -> CloudResult<()>;

    async fn get_connection(&self) -> CloudResult<ConnectionHandle>;
}
