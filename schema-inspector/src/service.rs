//! Schema introspection service.

use common::client;
use common::errors::{AppError, AppResult};
use common::models::query::QueryResult;
use libsql::Connection;

/// Table both inspectors target.
pub const TARGET_TABLE: &str = "opportunities";

/// Fetches and formats the column list of the target table.
pub struct SchemaService;

impl SchemaService {
    /// Creates a new schema service instance.
    pub fn new() -> Self {
        Self
    }

    /// Runs the introspection query and returns one line per column, in the
    /// order the database reports them.
    pub async fn inspect(&self, conn: &Connection) -> AppResult<Vec<String>> {
        let sql = format!("PRAGMA table_info({TARGET_TABLE})");
        let result = client::run_query(conn, &sql).await?;

        // table_info reports nothing for an unknown table rather than failing,
        // and a zero-column table cannot exist.
        if result.row_count == 0 {
            return Err(AppError::DatabaseQuery(format!(
                "table '{TARGET_TABLE}' does not exist"
            )));
        }

        tracing::info!(table = TARGET_TABLE, columns = result.row_count, "schema fetched");
        Ok(column_lines(&result))
    }
}

impl Default for SchemaService {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts the `name` field of each introspection row.
fn column_lines(result: &QueryResult) -> Vec<String> {
    (0..result.row_count)
        .map(|row| {
            result
                .value(row, "name")
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string()
        })
        .collect()
}
