//! Schema inspection entry point.
//!
//! Opens one connection, runs the fixed introspection query against the
//! `opportunities` table and prints each column name on its own line.

use common::client::ConnectionFactory;
use common::config::AppConfig;
use common::errors::AppResult;
use schema_inspector::service::SchemaService;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SERVICE_NAME: &str = "schema-inspector";

#[tokio::main]
async fn main() {
    // Load .env file (if present) before anything else
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    if let Err(e) = run().await {
        tracing::error!(service = SERVICE_NAME, error = %e, "schema inspection failed");
        std::process::exit(1);
    }
}

/// Connect, inspect, print. The connection handle is owned here and released
/// on every exit path, success or failure.
async fn run() -> AppResult<()> {
    let config = AppConfig::from_env()?;
    let conn = ConnectionFactory::connect(&config).await?;

    let lines = SchemaService::new().inspect(&conn).await?;
    for line in &lines {
        println!("{line}");
    }
    Ok(())
}
