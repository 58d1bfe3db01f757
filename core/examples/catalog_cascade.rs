// orderdesk/examples/catalog_cascade.rs

use orderdesk::catalog::{ActivityInput, PackageInput, PackageTier, ServiceInput};
use orderdesk::{CatalogService, CatalogStore, DeskResult, Principal, Role};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

fn main() -> DeskResult<()> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Catalog Cascade Example ---");

  let catalog = CatalogService::new(Arc::new(CatalogStore::new()));
  let admin = Principal::new(Uuid::new_v4(), Role::Admin);

  // 1. Build a small service -> package -> activity tree
  let service = catalog.create_service(
    &admin,
    ServiceInput {
      name: "Content Marketing".to_string(),
      description: "Blogs, newsletters and whitepapers".to_string(),
      icon: Some("pen".to_string()),
    },
  )?;
  for (tier, price) in [(PackageTier::Basic, 8000.0), (PackageTier::Premium, 24000.0)] {
    let package = catalog.create_package(
      &admin,
      PackageInput {
        service_id: service.id.clone(),
        name: format!("{:?} content", tier),
        tier,
        price,
        description: "Monthly content plan".to_string(),
      },
    )?;
    for name in ["Editorial calendar", "Blog posts"] {
      catalog.create_activity(
        &admin,
        ActivityInput {
          package_id: package.id.clone(),
          name: name.to_string(),
          description: format!("{} for {}", name, package.name),
        },
      )?;
    }
  }
  info!(
    packages = catalog.packages(&admin, None)?.len(),
    activities = catalog.activities(&admin, None)?.len(),
    "Catalog built."
  );

  // 2. Deleting the service takes its packages and activities with it
  let report = catalog.delete_service(&admin, &service.id)?;
  info!(?report, "Service deleted.");
  assert_eq!(report.packages, 2);
  assert_eq!(report.activities, 4);
  assert!(catalog.activities(&admin, None)?.is_empty());

  info!("--- Example Finished ---");
  Ok(())
}
