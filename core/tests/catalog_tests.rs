// tests/catalog_tests.rs
mod common;

use common::*;
use orderdesk::catalog::{
  ActivityInput, CascadeReport, CatalogSeed, Package, PackageInput, PackagePatch, PackageTier, ServiceInput,
  ServicePatch,
};
use orderdesk::{CatalogService, CatalogStore, DeskError, MemoryStore, Role};
use std::sync::Arc;

async fn catalog_with_callers() -> (CatalogService, orderdesk::Principal, orderdesk::Principal) {
  setup_tracing();
  let users = MemoryStore::new();
  let admin = insert_user(&users, "Root", Role::Admin).await;
  let staff = insert_user(&users, "Sam", Role::Staff).await;
  (
    CatalogService::new(Arc::new(sample_catalog())),
    principal_of(&admin),
    principal_of(&staff),
  )
}

#[tokio::test]
async fn test_delete_service_cascades_to_packages_and_activities() {
  let (catalog, admin, _) = catalog_with_callers().await;

  let report = catalog.delete_service(&admin, SEO_SERVICE).expect("delete");

  assert_eq!(
    report,
    CascadeReport {
      services: 1,
      packages: 2,
      activities: 3,
    }
  );
  let store = catalog.store();
  assert!(store.service(SEO_SERVICE).is_none());
  assert!(store.packages(Some(SEO_SERVICE)).is_empty());
  assert!(store.package(SEO_BASIC).is_none());
  assert!(store.activities(Some(SEO_BASIC)).is_empty());
  // Unrelated branches survive.
  assert_eq!(store.packages(None).len(), 1);
  assert_eq!(store.activities(None).len(), 1);
  assert!(store.activities(None).iter().all(|a| store.package(&a.package_id).is_some()));
}

#[tokio::test]
async fn test_delete_package_cascades_to_activities_only() {
  let (catalog, admin, _) = catalog_with_callers().await;

  let report = catalog.delete_package(&admin, SEO_BASIC).expect("delete");

  assert_eq!(report.services, 0);
  assert_eq!(report.packages, 1);
  assert_eq!(report.activities, 2);
  assert!(catalog.store().service(SEO_SERVICE).is_some());
  assert_eq!(catalog.store().packages(Some(SEO_SERVICE)).len(), 1);
}

#[tokio::test]
async fn test_missing_rows_are_not_found() {
  let (catalog, admin, staff) = catalog_with_callers().await;

  assert!(matches!(catalog.delete_service(&admin, "svc-nope"), Err(DeskError::NotFound(_))));
  assert!(matches!(catalog.delete_package(&admin, "pkg-nope"), Err(DeskError::NotFound(_))));
  assert!(matches!(catalog.delete_activity(&admin, "act-nope"), Err(DeskError::NotFound(_))));
  assert!(matches!(catalog.service(&staff, "svc-nope"), Err(DeskError::NotFound(_))));
  assert!(matches!(catalog.package(&staff, "pkg-nope"), Err(DeskError::NotFound(_))));
}

#[tokio::test]
async fn test_children_require_an_existing_parent() {
  let (catalog, admin, _) = catalog_with_callers().await;

  let orphan_package = catalog.create_package(
    &admin,
    PackageInput {
      service_id: "svc-missing".to_string(),
      name: "Ghost".to_string(),
      tier: PackageTier::Basic,
      price: 10.0,
      description: "No parent".to_string(),
    },
  );
  assert!(matches!(orphan_package, Err(DeskError::NotFound(_))));

  let orphan_activity = catalog.create_activity(
    &admin,
    ActivityInput {
      package_id: "pkg-missing".to_string(),
      name: "Ghost".to_string(),
      description: "No parent".to_string(),
    },
  );
  assert!(matches!(orphan_activity, Err(DeskError::NotFound(_))));

  let moved = catalog.update_package(
    &admin,
    SEO_BASIC,
    PackagePatch {
      service_id: Some("svc-missing".to_string()),
      ..PackagePatch::default()
    },
  );
  assert!(matches!(moved, Err(DeskError::NotFound(_))));
}

#[tokio::test]
async fn test_create_and_patch_validate_fields() {
  let (catalog, admin, _) = catalog_with_callers().await;

  match catalog.create_service(
    &admin,
    ServiceInput {
      name: "".to_string(),
      description: " ".to_string(),
      icon: None,
    },
  ) {
    Err(DeskError::Validation(fields)) => {
      assert_eq!(fields.message_for("name"), Some("Service name is required"));
      assert!(fields.has("description"));
    }
    other => panic!("expected validation error, got {:?}", other),
  }

  match catalog.update_package(
    &admin,
    SEO_BASIC,
    PackagePatch {
      price: Some(0.0),
      ..PackagePatch::default()
    },
  ) {
    Err(DeskError::Validation(fields)) => assert!(fields.has("price")),
    other => panic!("expected validation error, got {:?}", other),
  }

  let renamed = catalog
    .update_service(
      &admin,
      SEO_SERVICE,
      ServicePatch {
        name: Some(" Search Engine Optimisation ".to_string()),
        ..ServicePatch::default()
      },
    )
    .expect("patch");
  assert_eq!(renamed.name, "Search Engine Optimisation");
  assert_eq!(renamed.description, "SEO services");
}

#[tokio::test]
async fn test_created_rows_get_prefixed_ids() {
  let (catalog, admin, staff) = catalog_with_callers().await;

  let service = catalog
    .create_service(
      &admin,
      ServiceInput {
        name: "Social".to_string(),
        description: "Social media management".to_string(),
        icon: Some("share".to_string()),
      },
    )
    .unwrap();
  let package: Package = catalog
    .create_package(
      &admin,
      PackageInput {
        service_id: service.id.clone(),
        name: "Starter".to_string(),
        tier: PackageTier::Basic,
        price: 9999.0,
        description: "Two posts a week".to_string(),
      },
    )
    .unwrap();
  let activity = catalog
    .create_activity(
      &admin,
      ActivityInput {
        package_id: package.id.clone(),
        name: "Posting".to_string(),
        description: "Scheduled posts".to_string(),
      },
    )
    .unwrap();

  assert!(service.id.starts_with("svc-"));
  assert!(package.id.starts_with("pkg-"));
  assert!(activity.id.starts_with("act-"));
  assert_eq!(catalog.packages(&staff, Some(service.id.as_str())).unwrap(), vec![package]);
  assert_eq!(catalog.activities(&staff, None).unwrap().len(), 5);
}

#[tokio::test]
async fn test_staff_may_read_but_not_manage() {
  let (catalog, _, staff) = catalog_with_callers().await;

  assert_eq!(catalog.services(&staff).unwrap().len(), 2);
  let err = catalog.delete_service(&staff, SEO_SERVICE).unwrap_err();
  assert!(matches!(err, DeskError::Forbidden(_)));
  assert!(catalog.store().service(SEO_SERVICE).is_some());
}

#[test]
fn test_seed_with_orphans_is_rejected() {
  let mut seed = sample_seed();
  seed.packages[0].service_id = "svc-missing".to_string();
  assert!(matches!(CatalogStore::from_seed(seed), Err(DeskError::Validation(_))));

  let mut seed = sample_seed();
  seed.activities[0].package_id = "pkg-missing".to_string();
  assert!(matches!(CatalogStore::from_seed(seed), Err(DeskError::Validation(_))));

  assert!(CatalogStore::from_seed(CatalogSeed::default()).is_ok());
}

#[test]
fn test_seed_file_loads_from_json() {
  let path = std::env::temp_dir().join(format!("orderdesk-seed-{}.json", uuid::Uuid::new_v4()));
  std::fs::write(
    &path,
    r#"{
      "services": [{ "id": "svc-1", "name": "SEO", "description": "Search" }],
      "packages": [{ "id": "pkg-1", "serviceId": "svc-1", "name": "Basic", "tier": "Basic", "price": 100, "description": "Entry" }],
      "activities": [{ "id": "act-1", "packageId": "pkg-1", "name": "Audit", "description": "Site audit" }]
    }"#,
  )
  .unwrap();

  let store = CatalogStore::load_seed_file(&path).expect("seed loads");
  std::fs::remove_file(&path).ok();

  assert_eq!(store.services().len(), 1);
  assert_eq!(store.package("pkg-1").map(|p| p.price), Some(100.0));
  assert_eq!(store.activities(Some("pkg-1")).len(), 1);

  assert!(matches!(
    CatalogStore::load_seed_file("/definitely/not/here.json"),
    Err(DeskError::Internal(_))
  ));
}
