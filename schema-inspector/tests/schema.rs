//! End-to-end schema inspection against a local database.

use anyhow::Result;
use libsql::{Builder, Connection, Database};
use schema_inspector::service::SchemaService;

async fn opportunities_db() -> Result<(Database, Connection)> {
    let db = Builder::new_local(":memory:").build().await?;
    let conn = db.connect()?;
    conn.execute(
        "CREATE TABLE opportunities (
            id INTEGER PRIMARY KEY,
            player_id TEXT,
            player_name TEXT,
            market TEXT,
            selection TEXT
        )",
        (),
    )
    .await?;
    Ok((db, conn))
}

#[tokio::test]
async fn prints_one_line_per_column_in_order() -> Result<()> {
    let (_db, conn) = opportunities_db().await?;

    let lines = SchemaService::new().inspect(&conn).await?;

    assert_eq!(
        lines,
        vec!["id", "player_id", "player_name", "market", "selection"]
    );
    Ok(())
}

#[tokio::test]
async fn missing_table_is_an_error() -> Result<()> {
    let db = Builder::new_local(":memory:").build().await?;
    let conn = db.connect()?;

    let err = SchemaService::new()
        .inspect(&conn)
        .await
        .expect_err("introspecting a missing table should fail");

    assert!(err.to_string().contains("opportunities"));
    Ok(())
}

#[tokio::test]
async fn repeated_runs_are_identical() -> Result<()> {
    let (_db, conn) = opportunities_db().await?;

    let service = SchemaService::new();
    let first = service.inspect(&conn).await?;
    let second = service.inspect(&conn).await?;

    assert_eq!(first, second);
    Ok(())
}
