// tests/bootstrap_tests.rs
mod common;

use common::*;
use orderdesk::{MemoryStore, UserStore};
use orderdesk_server::config::AppConfig;
use orderdesk_server::state::AppState;
use orderdesk_server::{load_catalog, seed_admin};
use std::collections::HashMap;
use std::sync::Arc;

fn config_with(extra: &[(&str, &str)]) -> Arc<AppConfig> {
  let mut vars: HashMap<String, String> = HashMap::from([("DATABASE_URL".to_string(), "postgres://unused".to_string())]);
  vars.extend(extra.iter().map(|(k, v)| (k.to_string(), v.to_string())));
  Arc::new(AppConfig::from_lookup(|key| vars.get(key).cloned()).expect("config"))
}

#[test]
fn test_bundled_catalog_seed_loads() {
  setup_tracing();
  let seed = concat!(env!("CARGO_MANIFEST_DIR"), "/data/catalog.json");
  let catalog = load_catalog(&config_with(&[("CATALOG_SEED_PATH", seed)])).expect("bundled seed is valid");

  assert_eq!(catalog.services().len(), 3);
  assert!(catalog
    .packages(None)
    .iter()
    .all(|p| catalog.service(&p.service_id).is_some()));
  assert!(catalog
    .activities(None)
    .iter()
    .all(|a| catalog.package(&a.package_id).is_some()));
}

#[test]
fn test_missing_seed_path_gives_empty_catalog() {
  let catalog = load_catalog(&config_with(&[])).unwrap();
  assert!(catalog.services().is_empty());
}

#[tokio::test]
async fn test_seed_admin_runs_once() {
  setup_tracing();
  let config = config_with(&[
    ("SEED_ADMIN_EMAIL", "boss@example.com"),
    ("SEED_ADMIN_PASSWORD", "pw"),
  ]);
  let store = Arc::new(MemoryStore::new());
  let state = AppState::new(config, store.clone(), store.clone(), Arc::new(load_catalog(&config_with(&[])).unwrap()));

  seed_admin(&state).await.unwrap();
  seed_admin(&state).await.unwrap();

  let users = store.list_users().await.unwrap();
  assert_eq!(users.len(), 1);
  assert_eq!(users[0].email, "boss@example.com");
  assert!(users[0].role.is_admin());
}
