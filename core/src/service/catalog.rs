// orderdesk/src/service/catalog.rs

use std::sync::Arc;
use tracing::{info, instrument};

use crate::auth::guard::{authorize, Operation};
use crate::auth::principal::Principal;
use crate::catalog::{
  Activity, ActivityInput, ActivityPatch, CascadeReport, CatalogStore, Package, PackageInput, PackagePatch, Service,
  ServiceInput, ServicePatch,
};
use crate::error::{DeskError, DeskResult, FieldError};
use crate::wizard::{self, CampaignOrder, ClientDetails, ServiceSelection};

/// Role-checked access to the catalog and the campaign order wizard.
#[derive(Clone)]
pub struct CatalogService {
  store: Arc<CatalogStore>,
}

impl CatalogService {
  pub fn new(store: Arc<CatalogStore>) -> Self {
    Self { store }
  }

  pub fn store(&self) -> &CatalogStore {
    &self.store
  }

  // --- Reads ---

  pub fn services(&self, principal: &Principal) -> DeskResult<Vec<Service>> {
    authorize(Operation::ViewCatalog, principal)?;
    Ok(self.store.services())
  }

  pub fn service(&self, principal: &Principal, id: &str) -> DeskResult<Service> {
    authorize(Operation::ViewCatalog, principal)?;
    self
      .store
      .service(id)
      .ok_or_else(|| DeskError::NotFound("Service not found".to_string()))
  }

  pub fn packages(&self, principal: &Principal, service_id: Option<&str>) -> DeskResult<Vec<Package>> {
    authorize(Operation::ViewCatalog, principal)?;
    Ok(self.store.packages(service_id))
  }

  pub fn package(&self, principal: &Principal, id: &str) -> DeskResult<Package> {
    authorize(Operation::ViewCatalog, principal)?;
    self
      .store
      .package(id)
      .ok_or_else(|| DeskError::NotFound("Package not found".to_string()))
  }

  pub fn activities(&self, principal: &Principal, package_id: Option<&str>) -> DeskResult<Vec<Activity>> {
    authorize(Operation::ViewCatalog, principal)?;
    Ok(self.store.activities(package_id))
  }

  // --- Management (admin) ---

  pub fn create_service(&self, principal: &Principal, input: ServiceInput) -> DeskResult<Service> {
    authorize(Operation::ManageCatalog, principal)?;
    self.store.create_service(input)
  }

  pub fn update_service(&self, principal: &Principal, id: &str, patch: ServicePatch) -> DeskResult<Service> {
    authorize(Operation::ManageCatalog, principal)?;
    self.store.update_service(id, patch)
  }

  pub fn delete_service(&self, principal: &Principal, id: &str) -> DeskResult<CascadeReport> {
    authorize(Operation::ManageCatalog, principal)?;
    self.store.delete_service(id)
  }

  pub fn create_package(&self, principal: &Principal, input: PackageInput) -> DeskResult<Package> {
    authorize(Operation::ManageCatalog, principal)?;
    self.store.create_package(input)
  }

  pub fn update_package(&self, principal: &Principal, id: &str, patch: PackagePatch) -> DeskResult<Package> {
    authorize(Operation::ManageCatalog, principal)?;
    self.store.update_package(id, patch)
  }

  pub fn delete_package(&self, principal: &Principal, id: &str) -> DeskResult<CascadeReport> {
    authorize(Operation::ManageCatalog, principal)?;
    self.store.delete_package(id)
  }

  pub fn create_activity(&self, principal: &Principal, input: ActivityInput) -> DeskResult<Activity> {
    authorize(Operation::ManageCatalog, principal)?;
    self.store.create_activity(input)
  }

  pub fn update_activity(&self, principal: &Principal, id: &str, patch: ActivityPatch) -> DeskResult<Activity> {
    authorize(Operation::ManageCatalog, principal)?;
    self.store.update_activity(id, patch)
  }

  pub fn delete_activity(&self, principal: &Principal, id: &str) -> DeskResult<CascadeReport> {
    authorize(Operation::ManageCatalog, principal)?;
    self.store.delete_activity(id)
  }

  // --- Wizard ---

  /// Step-1 check. An empty list means the step may proceed.
  pub fn validate_client_details(&self, principal: &Principal, details: &ClientDetails) -> DeskResult<Vec<FieldError>> {
    authorize(Operation::ValidateWizardStep, principal)?;
    Ok(wizard::validate_client_details(details).into_vec())
  }

  /// Step-2 check. An empty list means the wizard may be submitted.
  pub fn validate_service_selection(
    &self,
    principal: &Principal,
    selection: &ServiceSelection,
  ) -> DeskResult<Vec<FieldError>> {
    authorize(Operation::ValidateWizardStep, principal)?;
    Ok(wizard::validate_service_selection(selection, &self.store).into_vec())
  }

  #[instrument(name = "catalog_service::place_campaign_order", skip_all, fields(caller = %principal.user_id))]
  pub fn place_campaign_order(
    &self,
    principal: &Principal,
    client: ClientDetails,
    selection: ServiceSelection,
  ) -> DeskResult<CampaignOrder> {
    authorize(Operation::PlaceCampaignOrder, principal)?;
    let order = wizard::build_campaign_order(client, selection, &self.store, principal.user_id)?;
    self.store.record_campaign_order(order.clone());
    info!(order_id = %order.id, "Campaign order placed.");
    Ok(order)
  }

  /// Admins see every campaign order; everyone else sees the ones they placed.
  pub fn campaign_orders(&self, principal: &Principal) -> DeskResult<Vec<CampaignOrder>> {
    authorize(Operation::ListCampaignOrders, principal)?;
    let placed_by = if principal.is_admin() { None } else { Some(principal.user_id) };
    Ok(self.store.campaign_orders(placed_by))
  }
}
