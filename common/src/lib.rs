//! Shared building blocks for the opportunity inspectors.
//!
//! Holds the pieces both binaries need: environment-sourced configuration,
//! the error taxonomy, the database connection factory and the dynamic
//! query-result model.

pub mod client;
pub mod config;
pub mod errors;
pub mod models;
