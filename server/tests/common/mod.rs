// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use once_cell::sync::Lazy;
use orderdesk::catalog::{Activity, CatalogSeed, Package, PackageTier, Service};
use orderdesk::{CatalogStore, MemoryStore, Principal, Role, User};
use orderdesk_server::config::{AppConfig, LogFormat};
use orderdesk_server::graphql::{build_schema, DeskSchema};
use orderdesk_server::state::AppState;
use orderdesk_server::telemetry;
use std::collections::HashMap;
use std::sync::Arc;

static TRACING_INIT: Lazy<()> = Lazy::new(|| telemetry::init_tracing(LogFormat::Pretty));

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "admin-pass";
pub const STAFF_EMAIL: &str = "staff@example.com";
pub const STAFF_PASSWORD: &str = "staff-pass";

pub fn test_config(app_env: &str) -> Arc<AppConfig> {
  let vars: HashMap<&str, &str> = HashMap::from([
    ("DATABASE_URL", "postgres://unused/orderdesk"),
    ("JWT_SECRET", "server-test-secret"),
    ("APP_ENV", app_env),
  ]);
  Arc::new(AppConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string())).expect("test config"))
}

fn seed_catalog() -> CatalogStore {
  CatalogStore::from_seed(CatalogSeed {
    services: vec![Service {
      id: "svc-seo".to_string(),
      name: "SEO".to_string(),
      description: "Search engine optimisation".to_string(),
      icon: None,
    }],
    packages: vec![Package {
      id: "pkg-seo-basic".to_string(),
      service_id: "svc-seo".to_string(),
      name: "Basic SEO".to_string(),
      tier: PackageTier::Basic,
      price: 15000.0,
      description: "Entry plan".to_string(),
    }],
    activities: vec![Activity {
      id: "act-audit".to_string(),
      package_id: "pkg-seo-basic".to_string(),
      name: "Site audit".to_string(),
      description: "Monthly audit".to_string(),
    }],
  })
  .expect("consistent seed")
}

/// App state over an in-memory store with one admin and one staff account.
pub struct TestApp {
  pub state: AppState,
  pub schema: DeskSchema,
  pub admin: User,
  pub staff: User,
}

impl TestApp {
  pub async fn new(app_env: &str) -> Self {
    setup_tracing();
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(test_config(app_env), store.clone(), store, Arc::new(seed_catalog()));

    let admin = state
      .users
      .ensure_admin("Admin", ADMIN_EMAIL, ADMIN_PASSWORD)
      .await
      .expect("seed admin")
      .expect("admin is new");
    let staff = state
      .users
      .create(
        &Principal::new(admin.id, Role::Admin),
        orderdesk::CreateUserInput {
          name: "Staff".to_string(),
          email: STAFF_EMAIL.to_string(),
          password: STAFF_PASSWORD.to_string(),
          role: None,
        },
      )
      .await
      .expect("create staff");

    let schema = build_schema(state.clone());
    Self {
      state,
      schema,
      admin,
      staff,
    }
  }

  pub fn admin_p(&self) -> Principal {
    Principal::new(self.admin.id, self.admin.role)
  }

  pub fn staff_p(&self) -> Principal {
    Principal::new(self.staff.id, self.staff.role)
  }

  /// Runs `query` as `principal` (anonymous when `None`) and returns the response as JSON.
  pub async fn run(&self, query: &str, principal: Option<Principal>) -> serde_json::Value {
    let mut request = async_graphql::Request::new(query);
    if let Some(p) = principal {
      request = request.data(p);
    }
    let response = self.schema.execute(request).await;
    serde_json::to_value(&response).expect("response serialises")
  }
}

pub fn error_code(response: &serde_json::Value) -> Option<&str> {
  response["errors"][0]["extensions"]["code"].as_str()
}
