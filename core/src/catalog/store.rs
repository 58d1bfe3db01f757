// orderdesk/src/catalog/store.rs

use parking_lot::{RwLock, RwLockReadGuard};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::model::{
  Activity, ActivityInput, ActivityPatch, CascadeReport, CatalogSeed, Package, PackageInput, PackagePatch, Service,
  ServiceInput, ServicePatch,
};
use crate::error::{DeskError, DeskResult, FieldErrors};
use crate::wizard::CampaignOrder;

const MIN_PACKAGE_PRICE: f64 = 1.0;

#[derive(Debug, Default)]
struct CatalogData {
  services: Vec<Service>,
  packages: Vec<Package>,
  activities: Vec<Activity>,
  campaign_orders: Vec<CampaignOrder>,
}

impl CatalogData {
  fn has_service(&self, id: &str) -> bool {
    self.services.iter().any(|s| s.id == id)
  }

  fn has_package(&self, id: &str) -> bool {
    self.packages.iter().any(|p| p.id == id)
  }

  // Removes the packages in `package_ids` and every activity under them.
  fn remove_packages(&mut self, package_ids: &HashSet<String>, report: &mut CascadeReport) {
    let before = self.packages.len();
    self.packages.retain(|p| !package_ids.contains(&p.id));
    report.packages += (before - self.packages.len()) as i32;

    let before = self.activities.len();
    self.activities.retain(|a| !package_ids.contains(&a.package_id));
    report.activities += (before - self.activities.len()) as i32;
  }
}

fn next_id(prefix: &str) -> String {
  format!("{}-{}", prefix, Uuid::new_v4().simple())
}

fn require(errors: &mut FieldErrors, field: &str, value: &str, message: &str) {
  if value.trim().is_empty() {
    errors.push(field, message);
  }
}

fn require_patch(errors: &mut FieldErrors, field: &str, value: Option<&String>, message: &str) {
  if let Some(v) = value {
    require(errors, field, v, message);
  }
}

fn check_price(errors: &mut FieldErrors, price: f64) {
  if !price.is_finite() || price < MIN_PACKAGE_PRICE {
    errors.push("price", "Price must be greater than 0");
  }
}

/// A consistent read of the whole catalog, held under one read lock.
///
/// Writers wait until the view is dropped. Do not call back into the
/// `CatalogStore` while holding one.
pub struct CatalogView<'a> {
  data: RwLockReadGuard<'a, CatalogData>,
}

impl CatalogView<'_> {
  pub fn service(&self, id: &str) -> Option<&Service> {
    self.data.services.iter().find(|s| s.id == id)
  }

  pub fn package(&self, id: &str) -> Option<&Package> {
    self.data.packages.iter().find(|p| p.id == id)
  }

  pub fn activities_of(&self, package_id: &str) -> Vec<Activity> {
    self
      .data
      .activities
      .iter()
      .filter(|a| a.package_id == package_id)
      .cloned()
      .collect()
  }
}

/// The service -> package -> activity catalog plus the campaign orders placed
/// against it, all held in memory.
///
/// Every mutation runs under one write lock, so a cascading delete is never
/// observed half done.
#[derive(Debug, Default)]
pub struct CatalogStore {
  data: RwLock<CatalogData>,
}

impl CatalogStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Builds a store from seed data, rejecting packages or activities whose parent is missing.
  pub fn from_seed(seed: CatalogSeed) -> DeskResult<Self> {
    let service_ids: HashSet<&str> = seed.services.iter().map(|s| s.id.as_str()).collect();
    if let Some(orphan) = seed.packages.iter().find(|p| !service_ids.contains(p.service_id.as_str())) {
      return Err(DeskError::validation(
        "packages",
        format!("Package {} references unknown service {}", orphan.id, orphan.service_id),
      ));
    }
    let package_ids: HashSet<&str> = seed.packages.iter().map(|p| p.id.as_str()).collect();
    if let Some(orphan) = seed.activities.iter().find(|a| !package_ids.contains(a.package_id.as_str())) {
      return Err(DeskError::validation(
        "activities",
        format!("Activity {} references unknown package {}", orphan.id, orphan.package_id),
      ));
    }

    Ok(Self {
      data: RwLock::new(CatalogData {
        services: seed.services,
        packages: seed.packages,
        activities: seed.activities,
        campaign_orders: Vec::new(),
      }),
    })
  }

  /// Loads a JSON seed file of the shape `{ "services": [..], "packages": [..], "activities": [..] }`.
  #[instrument(name = "catalog::load_seed_file", skip_all, fields(path = %path.as_ref().display()))]
  pub fn load_seed_file(path: impl AsRef<Path>) -> DeskResult<Self> {
    let raw = std::fs::read_to_string(path.as_ref())
      .map_err(|e| DeskError::Internal(format!("Cannot read catalog seed: {}", e)))?;
    let seed: CatalogSeed =
      serde_json::from_str(&raw).map_err(|e| DeskError::Internal(format!("Cannot parse catalog seed: {}", e)))?;
    let store = Self::from_seed(seed)?;
    {
      let data = store.data.read();
      info!(
        services = data.services.len(),
        packages = data.packages.len(),
        activities = data.activities.len(),
        "Catalog seed loaded."
      );
    }
    Ok(store)
  }

  // --- Reads ---

  pub fn view(&self) -> CatalogView<'_> {
    CatalogView { data: self.data.read() }
  }

  pub fn services(&self) -> Vec<Service> {
    self.data.read().services.clone()
  }

  pub fn service(&self, id: &str) -> Option<Service> {
    self.data.read().services.iter().find(|s| s.id == id).cloned()
  }

  /// All packages, or only those of `service_id`.
  pub fn packages(&self, service_id: Option<&str>) -> Vec<Package> {
    self
      .data
      .read()
      .packages
      .iter()
      .filter(|p| service_id.map_or(true, |sid| p.service_id == sid))
      .cloned()
      .collect()
  }

  pub fn package(&self, id: &str) -> Option<Package> {
    self.data.read().packages.iter().find(|p| p.id == id).cloned()
  }

  /// All activities, or only those of `package_id`.
  pub fn activities(&self, package_id: Option<&str>) -> Vec<Activity> {
    self
      .data
      .read()
      .activities
      .iter()
      .filter(|a| package_id.map_or(true, |pid| a.package_id == pid))
      .cloned()
      .collect()
  }

  pub fn activity(&self, id: &str) -> Option<Activity> {
    self.data.read().activities.iter().find(|a| a.id == id).cloned()
  }

  // --- Services ---

  #[instrument(name = "catalog::create_service", skip_all, fields(name = %input.name))]
  pub fn create_service(&self, input: ServiceInput) -> DeskResult<Service> {
    let mut errors = FieldErrors::new();
    require(&mut errors, "name", &input.name, "Service name is required");
    require(&mut errors, "description", &input.description, "Description is required");
    errors.into_result()?;

    let service = Service {
      id: next_id("svc"),
      name: input.name.trim().to_string(),
      description: input.description.trim().to_string(),
      icon: input.icon,
    };
    self.data.write().services.push(service.clone());
    debug!(service_id = %service.id, "Service created.");
    Ok(service)
  }

  #[instrument(name = "catalog::update_service", skip(self, patch))]
  pub fn update_service(&self, id: &str, patch: ServicePatch) -> DeskResult<Service> {
    let mut errors = FieldErrors::new();
    require_patch(&mut errors, "name", patch.name.as_ref(), "Service name is required");
    require_patch(&mut errors, "description", patch.description.as_ref(), "Description is required");
    errors.into_result()?;

    let mut data = self.data.write();
    let service = data
      .services
      .iter_mut()
      .find(|s| s.id == id)
      .ok_or_else(|| DeskError::NotFound("Service not found".to_string()))?;
    if let Some(name) = patch.name {
      service.name = name.trim().to_string();
    }
    if let Some(description) = patch.description {
      service.description = description.trim().to_string();
    }
    if patch.icon.is_some() {
      service.icon = patch.icon;
    }
    Ok(service.clone())
  }

  /// Deletes a service together with its packages and their activities.
  #[instrument(name = "catalog::delete_service", skip(self))]
  pub fn delete_service(&self, id: &str) -> DeskResult<CascadeReport> {
    let mut data = self.data.write();
    let before = data.services.len();
    data.services.retain(|s| s.id != id);
    if data.services.len() == before {
      return Err(DeskError::NotFound("Service not found".to_string()));
    }

    let mut report = CascadeReport {
      services: 1,
      ..CascadeReport::default()
    };
    let package_ids: HashSet<String> = data
      .packages
      .iter()
      .filter(|p| p.service_id == id)
      .map(|p| p.id.clone())
      .collect();
    data.remove_packages(&package_ids, &mut report);
    info!(?report, "Service deleted.");
    Ok(report)
  }

  // --- Packages ---

  #[instrument(name = "catalog::create_package", skip_all, fields(service_id = %input.service_id, name = %input.name))]
  pub fn create_package(&self, input: PackageInput) -> DeskResult<Package> {
    let mut errors = FieldErrors::new();
    require(&mut errors, "serviceId", &input.service_id, "Please select a service");
    require(&mut errors, "name", &input.name, "Package name is required");
    check_price(&mut errors, input.price);
    require(&mut errors, "description", &input.description, "Description is required");
    errors.into_result()?;

    let mut data = self.data.write();
    if !data.has_service(&input.service_id) {
      return Err(DeskError::NotFound("Service not found".to_string()));
    }
    let package = Package {
      id: next_id("pkg"),
      service_id: input.service_id,
      name: input.name.trim().to_string(),
      tier: input.tier,
      price: input.price,
      description: input.description.trim().to_string(),
    };
    data.packages.push(package.clone());
    debug!(package_id = %package.id, "Package created.");
    Ok(package)
  }

  #[instrument(name = "catalog::update_package", skip(self, patch))]
  pub fn update_package(&self, id: &str, patch: PackagePatch) -> DeskResult<Package> {
    let mut errors = FieldErrors::new();
    require_patch(&mut errors, "serviceId", patch.service_id.as_ref(), "Please select a service");
    require_patch(&mut errors, "name", patch.name.as_ref(), "Package name is required");
    if let Some(price) = patch.price {
      check_price(&mut errors, price);
    }
    require_patch(&mut errors, "description", patch.description.as_ref(), "Description is required");
    errors.into_result()?;

    let mut data = self.data.write();
    if let Some(service_id) = &patch.service_id {
      if !data.has_service(service_id) {
        return Err(DeskError::NotFound("Service not found".to_string()));
      }
    }
    let package = data
      .packages
      .iter_mut()
      .find(|p| p.id == id)
      .ok_or_else(|| DeskError::NotFound("Package not found".to_string()))?;
    if let Some(service_id) = patch.service_id {
      package.service_id = service_id;
    }
    if let Some(name) = patch.name {
      package.name = name.trim().to_string();
    }
    if let Some(tier) = patch.tier {
      package.tier = tier;
    }
    if let Some(price) = patch.price {
      package.price = price;
    }
    if let Some(description) = patch.description {
      package.description = description.trim().to_string();
    }
    Ok(package.clone())
  }

  /// Deletes a package together with its activities.
  #[instrument(name = "catalog::delete_package", skip(self))]
  pub fn delete_package(&self, id: &str) -> DeskResult<CascadeReport> {
    let mut data = self.data.write();
    if !data.has_package(id) {
      return Err(DeskError::NotFound("Package not found".to_string()));
    }
    let mut report = CascadeReport::default();
    data.remove_packages(&HashSet::from([id.to_string()]), &mut report);
    info!(?report, "Package deleted.");
    Ok(report)
  }

  // --- Activities ---

  #[instrument(name = "catalog::create_activity", skip_all, fields(package_id = %input.package_id, name = %input.name))]
  pub fn create_activity(&self, input: ActivityInput) -> DeskResult<Activity> {
    let mut errors = FieldErrors::new();
    require(&mut errors, "packageId", &input.package_id, "Please select a package");
    require(&mut errors, "name", &input.name, "Activity name is required");
    require(&mut errors, "description", &input.description, "Description is required");
    errors.into_result()?;

    let mut data = self.data.write();
    if !data.has_package(&input.package_id) {
      return Err(DeskError::NotFound("Package not found".to_string()));
    }
    let activity = Activity {
      id: next_id("act"),
      package_id: input.package_id,
      name: input.name.trim().to_string(),
      description: input.description.trim().to_string(),
    };
    data.activities.push(activity.clone());
    Ok(activity)
  }

  #[instrument(name = "catalog::update_activity", skip(self, patch))]
  pub fn update_activity(&self, id: &str, patch: ActivityPatch) -> DeskResult<Activity> {
    let mut errors = FieldErrors::new();
    require_patch(&mut errors, "packageId", patch.package_id.as_ref(), "Please select a package");
    require_patch(&mut errors, "name", patch.name.as_ref(), "Activity name is required");
    require_patch(&mut errors, "description", patch.description.as_ref(), "Description is required");
    errors.into_result()?;

    let mut data = self.data.write();
    if let Some(package_id) = &patch.package_id {
      if !data.has_package(package_id) {
        return Err(DeskError::NotFound("Package not found".to_string()));
      }
    }
    let activity = data
      .activities
      .iter_mut()
      .find(|a| a.id == id)
      .ok_or_else(|| DeskError::NotFound("Activity not found".to_string()))?;
    if let Some(package_id) = patch.package_id {
      activity.package_id = package_id;
    }
    if let Some(name) = patch.name {
      activity.name = name.trim().to_string();
    }
    if let Some(description) = patch.description {
      activity.description = description.trim().to_string();
    }
    Ok(activity.clone())
  }

  #[instrument(name = "catalog::delete_activity", skip(self))]
  pub fn delete_activity(&self, id: &str) -> DeskResult<CascadeReport> {
    let mut data = self.data.write();
    let before = data.activities.len();
    data.activities.retain(|a| a.id != id);
    if data.activities.len() == before {
      return Err(DeskError::NotFound("Activity not found".to_string()));
    }
    Ok(CascadeReport {
      activities: 1,
      ..CascadeReport::default()
    })
  }

  // --- Campaign orders ---

  pub fn record_campaign_order(&self, order: CampaignOrder) {
    self.data.write().campaign_orders.push(order);
  }

  /// Placed campaign orders, newest first, optionally limited to one placer.
  pub fn campaign_orders(&self, placed_by: Option<Uuid>) -> Vec<CampaignOrder> {
    self
      .data
      .read()
      .campaign_orders
      .iter()
      .rev()
      .filter(|o| placed_by.map_or(true, |uid| o.placed_by == uid))
      .cloned()
      .collect()
  }
}
