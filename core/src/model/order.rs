// orderdesk/src/model/order.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::user::User;

// Stored as the Postgres enum `order_status`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "graphql", derive(async_graphql::Enum))]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(type_name = "order_status", rename_all = "SCREAMING_SNAKE_CASE"))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
  #[default]
  Pending,
  Confirmed,
  Shipped,
  Cancelled,
}

impl OrderStatus {
  /// Every status, in the order the status breakdown reports them.
  pub const ALL: [OrderStatus; 4] = [
    OrderStatus::Pending,
    OrderStatus::Confirmed,
    OrderStatus::Shipped,
    OrderStatus::Cancelled,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      OrderStatus::Pending => "PENDING",
      OrderStatus::Confirmed => "CONFIRMED",
      OrderStatus::Shipped => "SHIPPED",
      OrderStatus::Cancelled => "CANCELLED",
    }
  }
}

impl fmt::Display for OrderStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// An order joined with its owner.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "graphql", derive(async_graphql::SimpleObject))]
#[serde(rename_all = "camelCase")]
pub struct Order {
  pub id: Uuid,
  pub order_no: String,
  pub status: OrderStatus,
  pub amount: f64,
  pub created_at: DateTime<Utc>,
  pub user: User,
}

impl Order {
  pub fn is_owned_by(&self, user_id: Uuid) -> bool {
    self.user.id == user_id
  }
}

#[derive(Debug, Clone)]
pub struct NewOrder {
  pub order_no: String,
  pub amount: f64,
  pub status: OrderStatus,
  pub user_id: Uuid,
}

#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(feature = "graphql", derive(async_graphql::InputObject))]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderInput {
  pub order_no: String,
  pub amount: f64,
  /// Defaults to `PENDING`.
  pub status: Option<OrderStatus>,
}

#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(feature = "graphql", derive(async_graphql::InputObject))]
pub struct UpdateOrderInput {
  pub id: Uuid,
  pub status: OrderStatus,
}
