// orderdesk/src/store/memory.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tracing::{debug, instrument};
use uuid::Uuid;

use super::{OrderFilter, OrderStore, OrderTotals, UserStore};
use crate::error::{DeskError, DeskResult};
use crate::model::{NewOrder, NewUser, Order, OrderStatus, User, UserCredentials};

#[derive(Debug, Clone)]
struct OrderRow {
  id: Uuid,
  order_no: String,
  status: OrderStatus,
  amount: f64,
  user_id: Uuid,
  created_at: DateTime<Utc>,
}

/// Users and orders held in process memory. Rows keep insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
  users: RwLock<Vec<UserCredentials>>,
  orders: RwLock<Vec<OrderRow>>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Overrides the creation time of an order. Returns false if no such order exists.
  pub fn set_created_at(&self, order_id: Uuid, created_at: DateTime<Utc>) -> bool {
    let mut orders = self.orders.write();
    match orders.iter_mut().find(|o| o.id == order_id) {
      Some(row) => {
        row.created_at = created_at;
        true
      }
      None => false,
    }
  }

  /// Flips the active flag of a user. Returns false if no such user exists.
  pub fn set_active(&self, user_id: Uuid, is_active: bool) -> bool {
    let mut users = self.users.write();
    match users.iter_mut().find(|c| c.user.id == user_id) {
      Some(creds) => {
        creds.user.is_active = is_active;
        true
      }
      None => false,
    }
  }

  // The owner row is looked up under the users lock; callers must not hold it.
  fn join(&self, row: &OrderRow) -> DeskResult<Order> {
    let users = self.users.read();
    let owner = users
      .iter()
      .find(|c| c.user.id == row.user_id)
      .map(|c| c.user.clone())
      .ok_or_else(|| DeskError::Internal(format!("Order {} references missing user {}", row.id, row.user_id)))?;
    Ok(Order {
      id: row.id,
      order_no: row.order_no.clone(),
      status: row.status,
      amount: row.amount,
      created_at: row.created_at,
      user: owner,
    })
  }
}

#[async_trait]
impl UserStore for MemoryStore {
  async fn find_credentials(&self, email: &str) -> DeskResult<Option<UserCredentials>> {
    Ok(self.users.read().iter().find(|c| c.user.email == email).cloned())
  }

  async fn find_user(&self, id: Uuid) -> DeskResult<Option<User>> {
    Ok(self.users.read().iter().find(|c| c.user.id == id).map(|c| c.user.clone()))
  }

  async fn list_users(&self) -> DeskResult<Vec<User>> {
    Ok(self.users.read().iter().map(|c| c.user.clone()).collect())
  }

  #[instrument(name = "memory_store::insert_user", skip(self, new_user), fields(email = %new_user.email))]
  async fn insert_user(&self, new_user: NewUser) -> DeskResult<User> {
    let mut users = self.users.write();
    if users.iter().any(|c| c.user.email == new_user.email) {
      return Err(DeskError::Conflict(format!("Email {} is already registered", new_user.email)));
    }
    let user = User {
      id: Uuid::new_v4(),
      name: new_user.name,
      email: new_user.email,
      role: new_user.role,
      is_active: true,
      created_at: Utc::now(),
    };
    users.push(UserCredentials {
      user: user.clone(),
      password_hash: new_user.password_hash,
    });
    debug!(user_id = %user.id, "User row inserted.");
    Ok(user)
  }
}

#[async_trait]
impl OrderStore for MemoryStore {
  #[instrument(name = "memory_store::insert_order", skip(self, new_order), fields(user_id = %new_order.user_id))]
  async fn insert_order(&self, new_order: NewOrder) -> DeskResult<Order> {
    if self.find_user(new_order.user_id).await?.is_none() {
      return Err(DeskError::NotFound("User not found".to_string()));
    }
    let row = OrderRow {
      id: Uuid::new_v4(),
      order_no: new_order.order_no,
      status: new_order.status,
      amount: new_order.amount,
      user_id: new_order.user_id,
      created_at: Utc::now(),
    };
    self.orders.write().push(row.clone());
    self.join(&row)
  }

  async fn find_order(&self, id: Uuid) -> DeskResult<Option<Order>> {
    let row = self.orders.read().iter().find(|o| o.id == id).cloned();
    row.map(|r| self.join(&r)).transpose()
  }

  async fn list_orders(&self, filter: &OrderFilter) -> DeskResult<Vec<Order>> {
    let mut rows: Vec<OrderRow> = self
      .orders
      .read()
      .iter()
      .filter(|o| filter.matches(o.user_id, o.status, o.created_at))
      .cloned()
      .collect();
    // Stable sort keeps the later insert first among equal timestamps once reversed.
    rows.sort_by_key(|o| o.created_at);
    rows.reverse();
    rows.iter().map(|r| self.join(r)).collect()
  }

  async fn update_status(&self, id: Uuid, status: OrderStatus) -> DeskResult<Order> {
    let updated = {
      let mut orders = self.orders.write();
      let row = orders
        .iter_mut()
        .find(|o| o.id == id)
        .ok_or_else(|| DeskError::NotFound("Order not found".to_string()))?;
      row.status = status;
      row.clone()
    };
    self.join(&updated)
  }

  async fn summarize(&self, filter: &OrderFilter) -> DeskResult<OrderTotals> {
    let orders = self.orders.read();
    Ok(
      orders
        .iter()
        .filter(|o| filter.matches(o.user_id, o.status, o.created_at))
        .fold(OrderTotals::default(), |acc, o| OrderTotals {
          count: acc.count + 1,
          revenue: acc.revenue + o.amount,
        }),
    )
  }
}
