//! Row sampling service.

use common::client;
use common::errors::AppResult;
use common::models::query::QueryResult;
use libsql::Connection;

/// The fixed sample query. Parameterless by design: this is a one-shot
/// diagnostic, not a reusable query surface.
const SAMPLE_SQL: &str = "SELECT player_id, player_name, market, selection \
     FROM opportunities WHERE market LIKE '%Card%' LIMIT 10";

/// Fetches and formats a bounded sample of card-market rows.
pub struct SampleService;

impl SampleService {
    /// Creates a new sample service instance.
    pub fn new() -> Self {
        Self
    }

    /// Runs the sample query and returns one three-line block per row.
    pub async fn inspect(&self, conn: &Connection) -> AppResult<Vec<String>> {
        let result = client::run_query(conn, SAMPLE_SQL).await?;

        tracing::info!(rows = result.row_count, "sample fetched");

        let mut lines = Vec::with_capacity(result.row_count * 3);
        for row in 0..result.row_count {
            lines.extend(row_block(&result, row));
        }
        Ok(lines)
    }
}

impl Default for SampleService {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats one result row as a header line plus the two player fields.
fn row_block(result: &QueryResult, row: usize) -> Vec<String> {
    vec![
        format!(
            "Selection: {}",
            display_or_null(result.value(row, "selection"))
        ),
        format!(
            "  player_id: {}",
            display_or_null(result.value(row, "player_id"))
        ),
        format!(
            "  player_name: {}",
            display_or_null(result.value(row, "player_name"))
        ),
    ]
}

/// Renders a field value, substituting the literal `NULL` for anything
/// falsy: SQL NULL, empty strings, numeric zero and false.
fn display_or_null(value: Option<&serde_json::Value>) -> String {
    match value {
        None | Some(serde_json::Value::Null) => "NULL".to_string(),
        Some(serde_json::Value::Bool(false)) => "NULL".to_string(),
        Some(serde_json::Value::String(s)) if s.is_empty() => "NULL".to_string(),
        Some(serde_json::Value::Number(n)) if n.as_f64() == Some(0.0) => "NULL".to_string(),
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
