// orderdesk/src/model/analytics.rs

use serde::Serialize;
use uuid::Uuid;

use super::order::OrderStatus;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[cfg_attr(feature = "graphql", derive(async_graphql::SimpleObject))]
#[serde(rename_all = "camelCase")]
pub struct OrderStats {
  pub total_orders: i64,
  pub total_revenue: f64,
}

/// One UTC calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "graphql", derive(async_graphql::SimpleObject))]
pub struct DateStats {
  /// `YYYY-MM-DD`
  pub date: String,
  pub count: i64,
  pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "graphql", derive(async_graphql::SimpleObject))]
pub struct StatusStats {
  pub status: OrderStatus,
  pub count: i64,
  pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "graphql", derive(async_graphql::SimpleObject))]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
  pub user_id: Uuid,
  pub user_name: String,
  pub count: i64,
  pub revenue: f64,
}
