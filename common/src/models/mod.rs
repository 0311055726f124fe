//! Shared data models for the inspectors.

pub mod query;

// Re-export commonly used types
pub use query::{ColumnInfo, QueryResult};
