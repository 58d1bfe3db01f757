// orderdesk/src/wizard/steps.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::rules::{is_email, is_url, required};
use crate::catalog::{CatalogStore, CatalogView};
use crate::error::FieldErrors;

pub const MIN_PHONE_LEN: usize = 10;
pub const MAX_PHONE_LEN: usize = 15;
pub const MIN_DURATION_MONTHS: i32 = 1;
pub const MAX_DURATION_MONTHS: i32 = 36;
pub const MIN_MONTHLY_CHARGES: f64 = 1.0;

/// Step 1: who the campaign is for and who sold it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "graphql", derive(async_graphql::SimpleObject, async_graphql::InputObject))]
#[cfg_attr(feature = "graphql", graphql(input_name = "ClientDetailsInput"))]
#[serde(rename_all = "camelCase")]
pub struct ClientDetails {
  pub company_name: String,
  pub website_url: String,
  pub client_name: String,
  pub client_email: String,
  pub client_phone: String,
  pub billing_address: String,
  pub city: String,
  pub state: String,
  pub country: String,
  pub zip_code: String,
  pub representative_name: String,
  pub representative_email: String,
}

/// Step 2: what is bought and on which terms.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[cfg_attr(feature = "graphql", derive(async_graphql::InputObject))]
#[cfg_attr(feature = "graphql", graphql(name = "ServiceSelectionInput"))]
#[serde(rename_all = "camelCase")]
pub struct ServiceSelection {
  pub service_id: String,
  pub package_id: String,
  pub comments: Option<String>,
  /// `YYYY-MM-DD`
  pub campaign_start_date: String,
  /// Months.
  pub campaign_duration: i32,
  pub monthly_charges: f64,
}

impl ServiceSelection {
  pub fn start_date(&self) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(self.campaign_start_date.trim(), "%Y-%m-%d").ok()
  }
}

/// Checks every step-1 field and reports all failures in form order.
pub fn validate_client_details(details: &ClientDetails) -> FieldErrors {
  let mut errors = FieldErrors::new();

  required(&mut errors, "companyName", &details.company_name, "Company name is required");
  if required(&mut errors, "websiteUrl", &details.website_url, "Website URL is required")
    && !is_url(details.website_url.trim())
  {
    errors.push("websiteUrl", "Please enter a valid URL");
  }
  required(&mut errors, "clientName", &details.client_name, "Client name is required");
  if required(&mut errors, "clientEmail", &details.client_email, "Client email is required")
    && !is_email(details.client_email.trim())
  {
    errors.push("clientEmail", "Please enter a valid email");
  }
  if required(&mut errors, "clientPhone", &details.client_phone, "Phone number is required") {
    let len = details.client_phone.trim().chars().count();
    if len < MIN_PHONE_LEN {
      errors.push("clientPhone", "Phone number must be at least 10 digits");
    } else if len > MAX_PHONE_LEN {
      errors.push("clientPhone", "Phone number must not exceed 15 digits");
    }
  }
  required(&mut errors, "billingAddress", &details.billing_address, "Billing address is required");
  required(&mut errors, "city", &details.city, "City is required");
  required(&mut errors, "state", &details.state, "State is required");
  required(&mut errors, "country", &details.country, "Country is required");
  required(&mut errors, "zipCode", &details.zip_code, "Zip code is required");
  required(
    &mut errors,
    "representativeName",
    &details.representative_name,
    "Representative name is required",
  );
  if required(
    &mut errors,
    "representativeEmail",
    &details.representative_email,
    "Representative email is required",
  ) && !is_email(details.representative_email.trim())
  {
    errors.push("representativeEmail", "Please enter a valid email");
  }

  errors
}

/// Checks every step-2 field, including that the package belongs to the chosen service.
pub fn validate_service_selection(selection: &ServiceSelection, catalog: &CatalogStore) -> FieldErrors {
  check_selection(selection, &catalog.view())
}

pub(crate) fn check_selection(selection: &ServiceSelection, catalog: &CatalogView<'_>) -> FieldErrors {
  let mut errors = FieldErrors::new();

  let service_given = required(&mut errors, "serviceId", &selection.service_id, "Please select a service");
  if service_given && catalog.service(&selection.service_id).is_none() {
    errors.push("serviceId", "Please select a service");
  }
  if required(&mut errors, "packageId", &selection.package_id, "Please select a package") {
    match catalog.package(&selection.package_id) {
      Some(pkg) if !service_given || pkg.service_id == selection.service_id => {}
      _ => errors.push("packageId", "Please select a package"),
    }
  }
  if required(
    &mut errors,
    "campaignStartDate",
    &selection.campaign_start_date,
    "Campaign start date is required",
  ) && selection.start_date().is_none()
  {
    errors.push("campaignStartDate", "Please enter a valid date");
  }
  if selection.campaign_duration < MIN_DURATION_MONTHS {
    errors.push("campaignDuration", "Duration must be at least 1 month");
  } else if selection.campaign_duration > MAX_DURATION_MONTHS {
    errors.push("campaignDuration", "Duration cannot exceed 36 months");
  }
  if !selection.monthly_charges.is_finite() || selection.monthly_charges < MIN_MONTHLY_CHARGES {
    errors.push("monthlyCharges", "Monthly charges must be greater than 0");
  }

  errors
}
