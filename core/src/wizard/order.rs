// orderdesk/src/wizard/order.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use tracing::{info, instrument};
use uuid::Uuid;

use super::steps::{check_selection, validate_client_details, ClientDetails, ServiceSelection};
use crate::catalog::{Activity, CatalogStore, PackageTier};
use crate::error::{DeskError, DeskResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[cfg_attr(feature = "graphql", derive(async_graphql::Enum))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignStatus {
  #[default]
  Created,
  InProgress,
  Completed,
  Cancelled,
  OnHold,
}

/// A submitted wizard, with the catalog names and activities as they were when it was placed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "graphql", derive(async_graphql::SimpleObject))]
#[serde(rename_all = "camelCase")]
pub struct CampaignOrder {
  pub id: String,
  pub client: ClientDetails,
  pub service_id: String,
  pub service_name: String,
  pub package_id: String,
  pub package_name: String,
  pub package_tier: PackageTier,
  pub activities: Vec<Activity>,
  pub comments: Option<String>,
  pub campaign_start_date: NaiveDate,
  pub campaign_duration: i32,
  pub monthly_charges: f64,
  pub total_amount: f64,
  pub status: CampaignStatus,
  pub placed_by: Uuid,
  pub created_at: DateTime<Utc>,
}

/// Campaign total: the monthly charge for every month of the campaign.
pub fn total_amount(monthly_charges: f64, duration_months: i32) -> f64 {
  monthly_charges * f64::from(duration_months)
}

/// Validates both wizard steps against `catalog` and assembles the order.
///
/// Failures from both steps are reported together in one `DeskError::Validation`.
/// The selection is checked and the order assembled against one catalog view, so a
/// concurrent delete either precedes the whole build or follows it.
#[instrument(name = "wizard::build_campaign_order", skip_all, fields(placed_by = %placed_by, package_id = %selection.package_id))]
pub fn build_campaign_order(
  client: ClientDetails,
  selection: ServiceSelection,
  catalog: &CatalogStore,
  placed_by: Uuid,
) -> DeskResult<CampaignOrder> {
  let view = catalog.view();
  let mut errors = validate_client_details(&client);
  for e in check_selection(&selection, &view).into_vec() {
    errors.push(&e.field, e.message);
  }
  errors.into_result()?;

  let service = view
    .service(&selection.service_id)
    .ok_or_else(|| DeskError::NotFound("Service not found".to_string()))?;
  let package = view
    .package(&selection.package_id)
    .ok_or_else(|| DeskError::NotFound("Package not found".to_string()))?;
  let campaign_start_date = selection
    .start_date()
    .ok_or_else(|| DeskError::validation("campaignStartDate", "Please enter a valid date"))?;

  let order = CampaignOrder {
    id: format!("order-{}", Uuid::new_v4().simple()),
    client,
    service_id: service.id.clone(),
    service_name: service.name.clone(),
    package_id: package.id.clone(),
    package_name: package.name.clone(),
    package_tier: package.tier,
    activities: view.activities_of(&package.id),
    comments: selection.comments.filter(|c| !c.trim().is_empty()),
    campaign_start_date,
    campaign_duration: selection.campaign_duration,
    monthly_charges: selection.monthly_charges,
    total_amount: total_amount(selection.monthly_charges, selection.campaign_duration),
    status: CampaignStatus::Created,
    placed_by,
    created_at: Utc::now(),
  };
  drop(view);
  info!(order_id = %order.id, total = order.total_amount, "Campaign order assembled.");
  Ok(order)
}
