//! Database connection factory and query execution.
//!
//! All wire-protocol work is delegated to the libsql client; this module
//! only builds the handle from credentials and collects result rows into
//! the shared [`QueryResult`] model.

use libsql::{Builder, Connection};

use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::models::query::{ColumnInfo, QueryResult};

/// Builds database connections from environment credentials.
pub struct ConnectionFactory;

impl ConnectionFactory {
    /// Opens one connection to the remote database.
    ///
    /// Credentials are passed through verbatim; an invalid URL or token
    /// surfaces here as a connection failure.
    pub async fn connect(config: &AppConfig) -> AppResult<Connection> {
        tracing::info!(url = %config.database_url, "connecting to database");

        let db = Builder::new_remote(config.database_url.clone(), config.auth_token.clone())
            .build()
            .await
            .map_err(|e| AppError::DatabaseConnection(e.to_string()))?;

        let conn = db
            .connect()
            .map_err(|e| AppError::DatabaseConnection(e.to_string()))?;

        tracing::info!("database connection established");
        Ok(conn)
    }
}

/// Executes one statement and collects every row into a [`QueryResult`].
pub async fn run_query(conn: &Connection, sql: &str) -> AppResult<QueryResult> {
    tracing::debug!(sql = %sql, "executing query");

    let mut rows = conn
        .query(sql, ())
        .await
        .map_err(|e| AppError::DatabaseQuery(e.to_string()))?;

    let column_count = rows.column_count();
    let mut columns = Vec::with_capacity(column_count as usize);
    for i in 0..column_count {
        columns.push(ColumnInfo {
            name: rows.column_name(i).unwrap_or_default().to_string(),
        });
    }

    let mut collected: Vec<Vec<serde_json::Value>> = Vec::new();
    while let Some(row) = rows
        .next()
        .await
        .map_err(|e| AppError::DatabaseQuery(e.to_string()))?
    {
        let mut values = Vec::with_capacity(column_count as usize);
        for i in 0..column_count {
            let value = row
                .get_value(i)
                .map_err(|e| AppError::DatabaseQuery(e.to_string()))?;
            values.push(to_json(value));
        }
        collected.push(values);
    }

    let row_count = collected.len();
    tracing::debug!(row_count, "query executed");

    Ok(QueryResult {
        columns,
        rows: collected,
        row_count,
    })
}

/// Converts a libsql value into a JSON value.
fn to_json(value: libsql::Value) -> serde_json::Value {
    match value {
        libsql::Value::Null => serde_json::Value::Null,
        libsql::Value::Integer(i) => serde_json::Value::from(i),
        libsql::Value::Real(f) => {
            serde_json::Number::from_f64(f).map_or(serde_json::Value::Null, serde_json::Value::Number)
        }
        libsql::Value::Text(s) => serde_json::Value::String(s),
        // Blobs are diagnostic dead weight here; show them as text when they
        // decode, otherwise drop to null.
        libsql::Value::Blob(b) => match String::from_utf8(b) {
            Ok(s) => serde_json::Value::String(s),
            Err(_) => serde_json::Value::Null,
        },
    }
}
