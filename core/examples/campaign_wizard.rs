// orderdesk/examples/campaign_wizard.rs

use orderdesk::catalog::{CatalogSeed, Package, PackageTier, Service};
use orderdesk::{CatalogService, CatalogStore, ClientDetails, DeskError, Principal, Role, ServiceSelection};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

fn main() -> Result<(), DeskError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Campaign Wizard Example ---");

  let store = CatalogStore::from_seed(CatalogSeed {
    services: vec![Service {
      id: "svc-ppc".to_string(),
      name: "Pay Per Click".to_string(),
      description: "Search and display ads".to_string(),
      icon: None,
    }],
    packages: vec![Package {
      id: "pkg-ppc-std".to_string(),
      service_id: "svc-ppc".to_string(),
      name: "Standard PPC".to_string(),
      tier: PackageTier::Standard,
      price: 20000.0,
      description: "Up to three campaigns".to_string(),
    }],
    activities: Vec::new(),
  })?;
  let catalog = CatalogService::new(Arc::new(store));
  let rep = Principal::new(Uuid::new_v4(), Role::Staff);

  // Step 1: client details. The first attempt is incomplete.
  let mut client = ClientDetails {
    company_name: "Globex".to_string(),
    website_url: "globex".to_string(),
    ..ClientDetails::default()
  };
  for error in catalog.validate_client_details(&rep, &client)? {
    warn!(field = %error.field, message = %error.message, "Step 1 needs attention.");
  }
  client = ClientDetails {
    website_url: "https://globex.example".to_string(),
    client_name: "Hank Scorpio".to_string(),
    client_email: "hank@globex.example".to_string(),
    client_phone: "5550100100".to_string(),
    billing_address: "1 Cypress Creek".to_string(),
    city: "Cypress Creek".to_string(),
    state: "OR".to_string(),
    country: "USA".to_string(),
    zip_code: "97000".to_string(),
    representative_name: "Homer".to_string(),
    representative_email: "homer@agency.example".to_string(),
    ..client
  };

  // Step 2: service, package and terms
  let selection = ServiceSelection {
    service_id: "svc-ppc".to_string(),
    package_id: "pkg-ppc-std".to_string(),
    comments: None,
    campaign_start_date: "2025-03-01".to_string(),
    campaign_duration: 12,
    monthly_charges: 20000.0,
  };
  let order = catalog.place_campaign_order(&rep, client, selection)?;
  info!(order_id = %order.id, total = order.total_amount, "Campaign order placed.");
  assert_eq!(order.total_amount, 240000.0);

  info!("--- Example Finished ---");
  Ok(())
}
