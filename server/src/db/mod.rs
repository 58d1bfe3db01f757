// orderdesk/server/src/db/mod.rs

pub mod pg_store;

pub use pg_store::PgStore;

use crate::errors::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{info, instrument};

#[instrument(name = "db::connect", skip(database_url))]
pub async fn connect(database_url: &str) -> Result<PgPool> {
  let pool = PgPoolOptions::new().max_connections(10).connect(database_url).await?;
  info!("Successfully connected to the database.");
  Ok(pool)
}

/// Applies the embedded migrations under `server/migrations`.
#[instrument(name = "db::migrate", skip(pool))]
pub async fn migrate(pool: &PgPool) -> Result<()> {
  sqlx::migrate!("./migrations").run(pool).await?;
  info!("Database migrations applied.");
  Ok(())
}
