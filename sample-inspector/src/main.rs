//! Sample query entry point.
//!
//! Opens one connection, pulls up to ten card-market rows from the
//! `opportunities` table and prints one block per row, substituting the
//! literal `NULL` for absent player fields.

use common::client::ConnectionFactory;
use common::config::AppConfig;
use common::errors::AppResult;
use sample_inspector::service::SampleService;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SERVICE_NAME: &str = "sample-inspector";

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
        tracing::error!(service = SERVICE_NAME, error = %e, "sample inspection failed");
        std::process::exit(1);
    }
}

/// Connect, sample, print. The connection handle is owned here and released
/// on every exit path, success or failure.
async fn run() -> AppResult<()> {
    let config = AppConfig::from_env()?;
    let conn = ConnectionFactory::connect(&config).await?;

    let lines = SampleService::new().inspect(&conn).await?;
    for line in &lines {
        println!("{line}");
    }
    Ok(())
}
