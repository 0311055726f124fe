//! Application error types.
//!
//! Every failure propagates to the binary's entry point; there is no local
//! recovery or retry anywhere in the inspectors.

use thiserror::Error;

/// Result alias used across the workspace.
pub type AppResult<T> = Result<T, AppError>;

/// Application error enumeration.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or unreadable configuration (environment variables).
    #[error("configuration error: {0}")]
    Config(String),

    /// Failed to build the database handle or open a connection.
    #[error("database connection failed: {0}")]
    DatabaseConnection(String),

    /// Query preparation, execution or row fetching failed.
    #[error("query execution failed: {0}")]
    DatabaseQuery(String),
}
