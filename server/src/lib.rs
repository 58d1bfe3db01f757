// orderdesk/server/src/lib.rs

//! HTTP and GraphQL surface of orderdesk: actix-web server, session cookie,
//! Postgres-backed stores and the GraphQL schema over the `orderdesk` services.

pub mod config;
pub mod db;
pub mod errors;
pub mod graphql;
pub mod session;
pub mod state;
pub mod telemetry;
pub mod web;

use orderdesk::CatalogStore;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::config::AppConfig;
use crate::db::PgStore;
use crate::errors::Result;
use crate::state::AppState;

/// Loads the catalog seed when one is configured, otherwise starts with an empty catalog.
pub fn load_catalog(config: &AppConfig) -> Result<CatalogStore> {
  match &config.catalog_seed_path {
    Some(path) => Ok(CatalogStore::load_seed_file(path)?),
    None => {
      warn!("CATALOG_SEED_PATH not set; starting with an empty catalog.");
      Ok(CatalogStore::new())
    }
  }
}

/// Creates the configured admin account if it does not exist yet.
pub async fn seed_admin(state: &AppState) -> Result<()> {
  if let Some(seed) = &state.config.seed_admin {
    if let Some(user) = state.users.ensure_admin(&seed.name, &seed.email, &seed.password).await? {
      info!(user_id = %user.id, "Seed admin account created.");
    }
  }
  Ok(())
}

/// Connects to Postgres, applies migrations, loads the catalog and seeds the admin.
#[instrument(name = "server::bootstrap", skip_all)]
pub async fn bootstrap(config: Arc<AppConfig>) -> Result<AppState> {
  let pool = db::connect(&config.database_url).await?;
  db::migrate(&pool).await?;
  let store = Arc::new(PgStore::new(pool));
  let catalog = Arc::new(load_catalog(&config)?);

  let state = AppState::new(config, store.clone(), store, catalog);
  seed_admin(&state).await?;
  Ok(state)
}
