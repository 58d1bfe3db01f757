// orderdesk/src/store/mod.rs

//! Persistence seams. The server implements these traits over Postgres; tests and
//! local tooling use [`memory::MemoryStore`].

pub mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::DeskResult;
use crate::model::{NewOrder, NewUser, Order, OrderStatus, User, UserCredentials};

/// Row filter shared by order listing and aggregation. Unset fields do not filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderFilter {
  pub owner: Option<Uuid>,
  pub status: Option<OrderStatus>,
  pub created_since: Option<DateTime<Utc>>,
}

impl OrderFilter {
  pub fn all() -> Self {
    Self::default()
  }

  pub fn owned_by(user_id: Uuid) -> Self {
    Self {
      owner: Some(user_id),
      ..Self::default()
    }
  }

  pub fn with_status(mut self, status: OrderStatus) -> Self {
    self.status = Some(status);
    self
  }

  pub fn since(mut self, since: DateTime<Utc>) -> Self {
    self.created_since = Some(since);
    self
  }

  pub fn matches(&self, user_id: Uuid, status: OrderStatus, created_at: DateTime<Utc>) -> bool {
    self.owner.map_or(true, |owner| owner == user_id)
      && self.status.map_or(true, |s| s == status)
      && self.created_since.map_or(true, |since| created_at >= since)
  }
}

/// Count and amount sum over a filtered set of orders.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrderTotals {
  pub count: i64,
  pub revenue: f64,
}

#[async_trait]
pub trait UserStore: Send + Sync {
  /// Looks a user up by email, including the password hash.
  async fn find_credentials(&self, email: &str) -> DeskResult<Option<UserCredentials>>;

  async fn find_user(&self, id: Uuid) -> DeskResult<Option<User>>;

  /// All users, oldest first.
  async fn list_users(&self) -> DeskResult<Vec<User>>;

  /// Inserts a new active user. Fails with `DeskError::Conflict` if the email is taken.
  async fn insert_user(&self, new_user: NewUser) -> DeskResult<User>;
}

#[async_trait]
pub trait OrderStore: Send + Sync {
  async fn insert_order(&self, new_order: NewOrder) -> DeskResult<Order>;

  async fn find_order(&self, id: Uuid) -> DeskResult<Option<Order>>;

  /// Matching orders joined with their owners, newest first.
  async fn list_orders(&self, filter: &OrderFilter) -> DeskResult<Vec<Order>>;

  /// Replaces the status. Fails with `DeskError::NotFound` if the order is gone.
  async fn update_status(&self, id: Uuid, status: OrderStatus) -> DeskResult<Order>;

  async fn summarize(&self, filter: &OrderFilter) -> DeskResult<OrderTotals>;
}
