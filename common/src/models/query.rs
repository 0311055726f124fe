//! Query result models.
//!
//! Rows are dynamically shaped: their layout is determined by the query at
//! runtime, so values are carried as `serde_json::Value` and addressed by
//! column name.

use serde::{Deserialize, Serialize};

/// Result of a query execution.
#[derive(Debug, Serialize, Deserialize)]
pub struct QueryResult {
    /// Column information, in statement order.
    pub columns: Vec<ColumnInfo>,

    /// Row data (each row is a vector of JSON values, one per column).
    pub rows: Vec<Vec<serde_json::Value>>,

    /// Number of rows returned.
    #[serde(default)]
    pub row_count: usize,
}

/// Column information in a query result.
#[derive(Debug, Serialize, Deserialize)]
pub struct ColumnInfo {
    /// Column name.
    pub name: String,
}

impl QueryResult {
    /// Creates a new empty query result.
    pub fn empty() -> Self {
        Self {
            columns: vec![],
            rows: vec![],
            row_count: 0,
        }
    }

    /// Returns the index of the named column, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Returns the value at `(row, column)`, if both exist.
    pub fn value(&self, row: usize, column: &str) -> Option<&serde_json::Value> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.get(idx)
    }
}
