use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use cloudweave_contracts::control::DataStoreService;
use cloudweave_contracts::data::DataClient;
use cloudweave_core::models::data_store::{ConnectionHandle, ExecuteResult, Migration, Row};
use cloudweave_core::{CloudError, CloudResult};

use crate::world::World;

/// A deliberately minimal SQL reader — enough to recognize `INSERT`,
/// `SELECT`, `UPDATE`, and `DELETE` shapes against a named table and a
/// single `WHERE column = ?` predicate. It does not parse real SQL; params
/// are bound positionally exactly as a prepared-statement adapter would.
pub struct MockDataStore {
    world: Arc<World>,
}

impl MockDataStore {
    pub fn new(world: Arc<World>) -> Self {
        Self { world }
    }

    fn table_after(sql: &str, keyword: &str) -> Option<String> {
        let upper = sql.to_uppercase();
        let idx = upper.find(&keyword.to_uppercase())?;
        let rest = sql[idx + keyword.len()..].trim_start();
        rest.split(|c: char| c.is_whitespace() || c == '(')
            .find(|s| !s.is_empty())
            .map(|s| s.trim_matches(|c: char| c == '`' || c == '"').to_string())
    }

    fn insert_columns(sql: &str) -> Vec<String> {
        match (sql.find('('), sql.find(')')) {
            (Some(start), Some(end)) if end > start => sql[start + 1..end]
                .split(',')
                .map(|c| c.trim().to_string())
                .collect(),
            _ => vec![],
        }
    }

    fn update_columns(sql: &str) -> Vec<String> {
        let upper = sql.to_uppercase();
        let Some(set_idx) = upper.find("SET") else {
            return vec![];
        };
        let where_idx = upper.find("WHERE").unwrap_or(sql.len());
        sql[set_idx + 3..where_idx]
            .split(',')
            .filter_map(|assign| assign.split('=').next().map(|c| c.trim().to_string()))
            .collect()
    }

    fn where_column(sql: &str) -> Option<String> {
        let upper = sql.to_uppercase();
        let idx = upper.find("WHERE")?;
        sql[idx + 5..]
            .split('=')
            .next()
            .map(|c| c.trim().to_string())
    }

    fn apply(
        rows: &mut HashMap<String, HashMap<String, serde_json::Value>>,
        sql: &str,
        params: &[serde_json::Value],
    ) -> CloudResult<ExecuteResult> {
        let upper = sql.trim_start().to_uppercase();
        if upper.starts_with("CREATE TABLE") || upper.starts_with("DROP TABLE") || upper.starts_with("ALTER TABLE") {
            if let Some(table) = Self::table_after(sql, "TABLE") {
                rows.entry(table).or_default();
            }
            return Ok(ExecuteResult { rows_affected: 0, insert_id: None });
        }
        if upper.starts_with("INSERT") {
            let table = Self::table_after(sql, "INTO")
                .ok_or_else(|| CloudError::validation("INSERT statement missing table name"))?;
            let columns = Self::insert_columns(sql);
            let mut row = serde_json::Map::new();
            for (column, value) in columns.iter().zip(params.iter()) {
                row.insert(column.clone(), value.clone());
            }
            let row_id = uuid::Uuid::new_v4().to_string();
            rows.entry(table).or_default().insert(row_id.clone(), serde_json::Value::Object(row));
            return Ok(ExecuteResult {
                rows_affected: 1,
                insert_id: Some(row_id),
            });
        }
        if upper.starts_with("DELETE") {
            let table = Self::table_after(sql, "FROM")
                .ok_or_else(|| CloudError::validation("DELETE statement missing table name"))?;
            let Some(table_rows) = rows.get_mut(&table) else {
                return Ok(ExecuteResult { rows_affected: 0, insert_id: None });
            };
            let before = table_rows.len();
            if let (Some(column), Some(value)) = (Self::where_column(sql), params.first()) {
                table_rows.retain(|_, row| row.get(&column) != Some(value));
            } else {
                table_rows.clear();
            }
            return Ok(ExecuteResult {
                rows_affected: (before - table_rows.len()) as u64,
                insert_id: None,
            });
        }
        if upper.starts_with("UPDATE") {
            let table = Self::table_after(sql, "UPDATE")
                .ok_or_else(|| CloudError::validation("UPDATE statement missing table name"))?;
            let columns = Self::update_columns(sql);
            let where_column = Self::where_column(sql);
            let where_value = params.get(columns.len());
            let Some(table_rows) = rows.get_mut(&table) else {
                return Ok(ExecuteResult { rows_affected: 0, insert_id: None });
            };
            let mut affected = 0u64;
            for row in table_rows.values_mut() {
                let matches = match (&where_column, where_value) {
                    (Some(column), Some(value)) => row.get(column) == Some(value),
                    _ => true,
                };
                if !matches {
                    continue;
                }
                if let Some(object) = row.as_object_mut() {
                    for (column, value) in columns.iter().zip(params.iter()) {
                        object.insert(column.clone(), value.clone());
                    }
                }
                affected += 1;
            }
            return Ok(ExecuteResult { rows_affected: affected, insert_id: None });
        }
        Err(CloudError::validation(format!(
            "unrecognized statement shape: {sql}"
        )))
    }

    fn select(
        rows: &HashMap<String, HashMap<String, serde_json::Value>>,
        sql: &str,
        params: &[serde_json::Value],
    ) -> CloudResult<Vec<Row>> {
        let table = Self::table_after(sql, "FROM")
            .ok_or_else(|| CloudError::validation("SELECT statement missing table name"))?;
        let Some(table_rows) = rows.get(&table) else {
            return Ok(vec![]);
        };
        let predicate = Self::where_column(sql).zip(params.first().cloned());
        Ok(table_rows
            .values()
            .filter(|row| match &predicate {
                Some((column, value)) => row.get(column) == Some(value),
                None => true,
            })
            .filter_map(|row| row.as_object().cloned())
            .collect())
    }
}

#[async_trait]
impl DataStoreService for MockDataStore {
    async fn connect(&self, _connection_string: Option<&str>) -> CloudResult<()> {
        self.world.latency.apply().await;
        Ok(())
    }

    async fn query(&self, sql: &str, params: &[serde_json::Value]) -> CloudResult<Vec<Row>> {
        DataClient::query(self, sql, params).await
    }

    async fn execute(&self, sql: &str, params: &[serde_json::Value]) -> CloudResult<ExecuteResult> {
        DataClient::execute(self, sql, params).await
    }

    async fn transaction(
        &self,
        ops: Vec<(String, Vec<serde_json::Value>)>,
    ) -> CloudResult<Vec<ExecuteResult>> {
        DataClient::transaction(self, ops).await
    }

    async fn migrate(&self, migrations: Vec<Migration>) -> CloudResult<()> {
        self.world.latency.apply().await;
        let mut sorted = migrations;
        sorted.sort_by_key(|m| m.version);
        let mut applied = self.world.migrations_applied.lock().await;
        let mut tables = self.world.tables.lock().await;
        for migration in sorted {
            if applied.contains(&migration.version) {
                continue;
            }
            tables.insert(migration.name.clone(), migration.sql.clone());
            applied.insert(migration.version);
        }
        Ok(())
    }

    async fn get_connection(&self) -> CloudResult<ConnectionHandle> {
        DataClient::get_connection(self).await
    }
}

#[async_trait]
impl DataClient for MockDataStore {
    async fn query(&self, sql: &str, params: &[serde_json::Value]) -> CloudResult<Vec<Row>> {
        self.world.latency.apply().await;
        let rows = self.world.rows.lock().await;
        Self::select(&rows, sql, params)
    }

    async fn execute(&self, sql: &str, params: &[serde_json::Value]) -> CloudResult<ExecuteResult> {
        self.world.latency.apply().await;
        let mut rows = self.world.rows.lock().await;
        Self::apply(&mut rows, sql, params)
    }

    async fn transaction(
        &self,
        ops: Vec<(String, Vec<serde_json::Value>)>,
    ) -> CloudResult<Vec<ExecuteResult>> {
        self.world.latency.apply().await;
        let mut rows = self.world.rows.lock().await;
        let mut staged = rows.clone();
        let mut results = Vec::with_capacity(ops.len());
        for (sql, params) in &ops {
            results.push(Self::apply(&mut staged, sql, params)?);
        }
        *rows = staged;
        Ok(results)
    }

    async fn get_connection(&self) -> CloudResult<ConnectionHandle> {
        self.world.latency.apply().await;
        Ok(ConnectionHandle {
            id: self.world.ids.next("connection").await,
        })
    }

    async fn release_connection(&self, _handle: ConnectionHandle) -> CloudResult<()> {
        Ok(())
    }
}
