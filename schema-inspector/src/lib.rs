//! Column-name introspection for the `opportunities` table.

pub mod service;
