// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use once_cell::sync::Lazy;
use orderdesk::catalog::{Activity, CatalogSeed, Package, PackageTier, Service};
use orderdesk::model::NewUser;
use orderdesk::{
  CatalogStore, ClientDetails, MemoryStore, OrderService, Principal, Role, ServiceSelection, User, UserStore,
};
use std::sync::Arc;
use tracing::Level;

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

pub fn principal_of(user: &User) -> Principal {
  Principal::new(user.id, user.role)
}

/// Inserts a user with a placeholder hash. Use `auth_tests` helpers when a real login is needed.
pub async fn insert_user(store: &MemoryStore, name: &str, role: Role) -> User {
  store
    .insert_user(NewUser {
      name: name.to_string(),
      email: format!("{}@example.com", name.to_lowercase()),
      password_hash: "unused".to_string(),
      role,
    })
    .await
    .expect("insert test user")
}

/// A memory store with one admin and two staff members.
pub struct OrderFixture {
  pub store: Arc<MemoryStore>,
  pub service: OrderService,
  pub admin: User,
  pub alice: User,
  pub bob: User,
}

impl OrderFixture {
  pub async fn new() -> Self {
    setup_tracing();
    let store = Arc::new(MemoryStore::new());
    let admin = insert_user(&store, "Root", Role::Admin).await;
    let alice = insert_user(&store, "Alice", Role::Staff).await;
    let bob = insert_user(&store, "Bob", Role::Staff).await;
    let service = OrderService::new(store.clone(), store.clone());
    Self {
      store,
      service,
      admin,
      alice,
      bob,
    }
  }

  pub fn admin_p(&self) -> Principal {
    principal_of(&self.admin)
  }

  pub fn alice_p(&self) -> Principal {
    principal_of(&self.alice)
  }

  pub fn bob_p(&self) -> Principal {
    principal_of(&self.bob)
  }
}

// --- Catalog fixtures ---

pub const SEO_SERVICE: &str = "svc-seo";
pub const ADS_SERVICE: &str = "svc-ads";
pub const SEO_BASIC: &str = "pkg-seo-basic";
pub const SEO_PREMIUM: &str = "pkg-seo-premium";
pub const ADS_STANDARD: &str = "pkg-ads-standard";

fn service(id: &str, name: &str) -> Service {
  Service {
    id: id.to_string(),
    name: name.to_string(),
    description: format!("{} services", name),
    icon: None,
  }
}

fn package(id: &str, service_id: &str, tier: PackageTier, price: f64) -> Package {
  Package {
    id: id.to_string(),
    service_id: service_id.to_string(),
    name: format!("{:?} plan", tier),
    tier,
    price,
    description: "Monthly plan".to_string(),
  }
}

fn activity(id: &str, package_id: &str, name: &str) -> Activity {
  Activity {
    id: id.to_string(),
    package_id: package_id.to_string(),
    name: name.to_string(),
    description: format!("{} every month", name),
  }
}

pub fn sample_seed() -> CatalogSeed {
  CatalogSeed {
    services: vec![service(SEO_SERVICE, "SEO"), service(ADS_SERVICE, "Paid Ads")],
    packages: vec![
      package(SEO_BASIC, SEO_SERVICE, PackageTier::Basic, 15000.0),
      package(SEO_PREMIUM, SEO_SERVICE, PackageTier::Premium, 45000.0),
      package(ADS_STANDARD, ADS_SERVICE, PackageTier::Standard, 25000.0),
    ],
    activities: vec![
      activity("act-audit", SEO_BASIC, "Site audit"),
      activity("act-keywords", SEO_BASIC, "Keyword research"),
      activity("act-backlinks", SEO_PREMIUM, "Backlink outreach"),
      activity("act-campaigns", ADS_STANDARD, "Campaign setup"),
    ],
  }
}

pub fn sample_catalog() -> CatalogStore {
  CatalogStore::from_seed(sample_seed()).expect("sample seed is consistent")
}

pub fn valid_client() -> ClientDetails {
  ClientDetails {
    company_name: "Acme Corp".to_string(),
    website_url: "https://acme.example".to_string(),
    client_name: "Wile E.".to_string(),
    client_email: "wile@acme.example".to_string(),
    client_phone: "9876543210".to_string(),
    billing_address: "1 Desert Road".to_string(),
    city: "Pune".to_string(),
    state: "MH".to_string(),
    country: "India".to_string(),
    zip_code: "411001".to_string(),
    representative_name: "Rita Rep".to_string(),
    representative_email: "rita@agency.example".to_string(),
  }
}

pub fn valid_selection() -> ServiceSelection {
  ServiceSelection {
    service_id: SEO_SERVICE.to_string(),
    package_id: SEO_BASIC.to_string(),
    comments: Some("Start with the audit".to_string()),
    campaign_start_date: "2025-01-15".to_string(),
    campaign_duration: 6,
    monthly_charges: 15000.0,
  }
}
