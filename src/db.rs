use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::info;

use crate::config::AppConfig;

/// Builds the process-wide pool. The caller owns it and closes it on shutdown.
pub async fn connect(config: &AppConfig) -> anyhow::Result<PgPool> {
    let options = config.database.connect_options()?;
    let db = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
        .context("connect to database")?;
    info!(max_connections = config.max_connections, "database pool ready");
    Ok(db)
}
