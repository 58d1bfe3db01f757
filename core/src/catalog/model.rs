// orderdesk/src/catalog/model.rs

use serde::{Deserialize, Serialize};

/// A sellable service, the root of the catalog hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "graphql", derive(async_graphql::SimpleObject))]
#[serde(rename_all = "camelCase")]
pub struct Service {
  pub id: String,
  pub name: String,
  pub description: String,
  #[serde(default)]
  pub icon: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "graphql", derive(async_graphql::Enum))]
pub enum PackageTier {
  Basic,
  Standard,
  Premium,
}

/// A priced bundle offered under one service. `price` is the monthly charge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "graphql", derive(async_graphql::SimpleObject))]
#[serde(rename_all = "camelCase")]
pub struct Package {
  pub id: String,
  pub service_id: String,
  pub name: String,
  pub tier: PackageTier,
  pub price: f64,
  pub description: String,
}

/// A deliverable included in a package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "graphql", derive(async_graphql::SimpleObject))]
#[serde(rename_all = "camelCase")]
pub struct Activity {
  pub id: String,
  pub package_id: String,
  pub name: String,
  pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(feature = "graphql", derive(async_graphql::InputObject))]
pub struct ServiceInput {
  pub name: String,
  pub description: String,
  pub icon: Option<String>,
}

/// Partial update; unset fields keep their value.
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "graphql", derive(async_graphql::InputObject))]
pub struct ServicePatch {
  pub name: Option<String>,
  pub description: Option<String>,
  pub icon: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(feature = "graphql", derive(async_graphql::InputObject))]
#[serde(rename_all = "camelCase")]
pub struct PackageInput {
  pub service_id: String,
  pub name: String,
  pub tier: PackageTier,
  pub price: f64,
  pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "graphql", derive(async_graphql::InputObject))]
#[serde(rename_all = "camelCase")]
pub struct PackagePatch {
  pub service_id: Option<String>,
  pub name: Option<String>,
  pub tier: Option<PackageTier>,
  pub price: Option<f64>,
  pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(feature = "graphql", derive(async_graphql::InputObject))]
#[serde(rename_all = "camelCase")]
pub struct ActivityInput {
  pub package_id: String,
  pub name: String,
  pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "graphql", derive(async_graphql::InputObject))]
#[serde(rename_all = "camelCase")]
pub struct ActivityPatch {
  pub package_id: Option<String>,
  pub name: Option<String>,
  pub description: Option<String>,
}

/// How many rows of each kind a delete removed, cascade included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "graphql", derive(async_graphql::SimpleObject))]
pub struct CascadeReport {
  pub services: i32,
  pub packages: i32,
  pub activities: i32,
}

/// Initial catalog contents, typically loaded from a JSON file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSeed {
  #[serde(default)]
  pub services: Vec<Service>,
  #[serde(default)]
  pub packages: Vec<Package>,
  #[serde(default)]
  pub activities: Vec<Activity>,
}
