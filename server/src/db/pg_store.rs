// orderdesk/server/src/db/pg_store.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use orderdesk::model::{NewOrder, NewUser, UserCredentials};
use orderdesk::{DeskError, DeskResult, Order, OrderFilter, OrderStatus, OrderStore, OrderTotals, Role, User, UserStore};
use sqlx::{FromRow, PgPool};
use tracing::{debug, instrument, warn};
use uuid::Uuid;

const USER_COLUMNS: &str = "id, name, email, password_hash, role, is_active, created_at";

// Orders are always read joined with their owner.
const ORDER_SELECT: &str = "SELECT o.id, o.order_no, o.status, o.amount, o.created_at, \
   u.id AS user_id, u.name AS user_name, u.email AS user_email, u.role AS user_role, \
   u.is_active AS user_is_active, u.created_at AS user_created_at";

const FILTER_CLAUSE: &str = "($1::uuid IS NULL OR o.user_id = $1) \
   AND ($2::order_status IS NULL OR o.status = $2) \
   AND ($3::timestamptz IS NULL OR o.created_at >= $3)";

#[derive(Debug, FromRow)]
struct UserRow {
  id: Uuid,
  name: String,
  email: String,
  password_hash: String,
  role: Role,
  is_active: bool,
  created_at: DateTime<Utc>,
}

impl From<UserRow> for UserCredentials {
  fn from(row: UserRow) -> Self {
    UserCredentials {
      user: User {
        id: row.id,
        name: row.name,
        email: row.email,
        role: row.role,
        is_active: row.is_active,
        created_at: row.created_at,
      },
      password_hash: row.password_hash,
    }
  }
}

#[derive(Debug, FromRow)]
struct OrderRow {
  id: Uuid,
  order_no: String,
  status: OrderStatus,
  amount: f64,
  created_at: DateTime<Utc>,
  user_id: Uuid,
  user_name: String,
  user_email: String,
  user_role: Role,
  user_is_active: bool,
  user_created_at: DateTime<Utc>,
}

impl From<OrderRow> for Order {
  fn from(row: OrderRow) -> Self {
    Order {
      id: row.id,
      order_no: row.order_no,
      status: row.status,
      amount: row.amount,
      created_at: row.created_at,
      user: User {
        id: row.user_id,
        name: row.user_name,
        email: row.user_email,
        role: row.user_role,
        is_active: row.user_is_active,
        created_at: row.user_created_at,
      },
    }
  }
}

fn store_error(err: sqlx::Error) -> DeskError {
  DeskError::Store { source: err.into() }
}

/// `UserStore` and `OrderStore` over the `users` and `orders` tables.
#[derive(Clone)]
pub struct PgStore {
  pool: PgPool,
}

impl PgStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }

  pub fn pool(&self) -> &PgPool {
    &self.pool
  }
}

#[async_trait]
impl UserStore for PgStore {
  #[instrument(name = "pg_store::find_credentials", skip(self))]
  async fn find_credentials(&self, email: &str) -> DeskResult<Option<UserCredentials>> {
    let sql = format!("SELECT {} FROM users WHERE email = $1", USER_COLUMNS);
    let row = sqlx::query_as::<_, UserRow>(&sql)
      .bind(email)
      .fetch_optional(&self.pool)
      .await
      .map_err(store_error)?;
    Ok(row.map(UserCredentials::from))
  }

  #[instrument(name = "pg_store::find_user", skip(self))]
  async fn find_user(&self, id: Uuid) -> DeskResult<Option<User>> {
    let sql = format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS);
    let row = sqlx::query_as::<_, UserRow>(&sql)
      .bind(id)
      .fetch_optional(&self.pool)
      .await
      .map_err(store_error)?;
    Ok(row.map(|r| UserCredentials::from(r).user))
  }

  #[instrument(name = "pg_store::list_users", skip(self))]
  async fn list_users(&self) -> DeskResult<Vec<User>> {
    let sql = format!("SELECT {} FROM users ORDER BY created_at ASC", USER_COLUMNS);
    let rows = sqlx::query_as::<_, UserRow>(&sql)
      .fetch_all(&self.pool)
      .await
      .map_err(store_error)?;
    debug!(count = rows.len(), "Users fetched.");
    Ok(rows.into_iter().map(|r| UserCredentials::from(r).user).collect())
  }

  #[instrument(name = "pg_store::insert_user", skip(self, new_user), fields(email = %new_user.email))]
  async fn insert_user(&self, new_user: NewUser) -> DeskResult<User> {
    let sql = format!(
      "INSERT INTO users (id, name, email, password_hash, role) VALUES ($1, $2, $3, $4, $5) RETURNING {}",
      USER_COLUMNS
    );
    let result = sqlx::query_as::<_, UserRow>(&sql)
      .bind(Uuid::new_v4())
      .bind(&new_user.name)
      .bind(&new_user.email)
      .bind(&new_user.password_hash)
      .bind(new_user.role)
      .fetch_one(&self.pool)
      .await;

    match result {
      Ok(row) => Ok(UserCredentials::from(row).user),
      Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
        warn!("Insert refused: email already registered.");
        Err(DeskError::Conflict(format!("Email {} is already registered", new_user.email)))
      }
      Err(e) => Err(store_error(e)),
    }
  }
}

#[async_trait]
impl OrderStore for PgStore {
  #[instrument(name = "pg_store::insert_order", skip(self, new_order), fields(user_id = %new_order.user_id))]
  async fn insert_order(&self, new_order: NewOrder) -> DeskResult<Order> {
    let sql = format!(
      "WITH o AS (INSERT INTO orders (id, order_no, status, amount, user_id) \
       VALUES ($1, $2, $3, $4, $5) RETURNING *) \
       {} FROM o JOIN users u ON u.id = o.user_id",
      ORDER_SELECT
    );
    let result = sqlx::query_as::<_, OrderRow>(&sql)
      .bind(Uuid::new_v4())
      .bind(&new_order.order_no)
      .bind(new_order.status)
      .bind(new_order.amount)
      .bind(new_order.user_id)
      .fetch_one(&self.pool)
      .await;

    match result {
      Ok(row) => Ok(row.into()),
      Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => {
        Err(DeskError::NotFound("User not found".to_string()))
      }
      Err(e) => Err(store_error(e)),
    }
  }

  #[instrument(name = "pg_store::find_order", skip(self))]
  async fn find_order(&self, id: Uuid) -> DeskResult<Option<Order>> {
    let sql = format!("{} FROM orders o JOIN users u ON u.id = o.user_id WHERE o.id = $1", ORDER_SELECT);
    let row = sqlx::query_as::<_, OrderRow>(&sql)
      .bind(id)
      .fetch_optional(&self.pool)
      .await
      .map_err(store_error)?;
    Ok(row.map(Order::from))
  }

  #[instrument(name = "pg_store::list_orders", skip(self))]
  async fn list_orders(&self, filter: &OrderFilter) -> DeskResult<Vec<Order>> {
    let sql = format!(
      "{} FROM orders o JOIN users u ON u.id = o.user_id WHERE {} ORDER BY o.created_at DESC",
      ORDER_SELECT, FILTER_CLAUSE
    );
    let rows = sqlx::query_as::<_, OrderRow>(&sql)
      .bind(filter.owner)
      .bind(filter.status)
      .bind(filter.created_since)
      .fetch_all(&self.pool)
      .await
      .map_err(store_error)?;
    debug!(count = rows.len(), "Orders fetched.");
    Ok(rows.into_iter().map(Order::from).collect())
  }

  #[instrument(name = "pg_store::update_status", skip(self))]
  async fn update_status(&self, id: Uuid, status: OrderStatus) -> DeskResult<Order> {
    let sql = format!(
      "WITH o AS (UPDATE orders SET status = $2 WHERE id = $1 RETURNING *) \
       {} FROM o JOIN users u ON u.id = o.user_id",
      ORDER_SELECT
    );
    sqlx::query_as::<_, OrderRow>(&sql)
      .bind(id)
      .bind(status)
      .fetch_optional(&self.pool)
      .await
      .map_err(store_error)?
      .map(Order::from)
      .ok_or_else(|| DeskError::NotFound("Order not found".to_string()))
  }

  #[instrument(name = "pg_store::summarize", skip(self))]
  async fn summarize(&self, filter: &OrderFilter) -> DeskResult<OrderTotals> {
    let sql = format!(
      "SELECT COUNT(*)::BIGINT, COALESCE(SUM(o.amount), 0)::DOUBLE PRECISION FROM orders o WHERE {}",
      FILTER_CLAUSE
    );
    let (count, revenue): (i64, f64) = sqlx::query_as(&sql)
      .bind(filter.owner)
      .bind(filter.status)
      .bind(filter.created_since)
      .fetch_one(&self.pool)
      .await
      .map_err(store_error)?;
    Ok(OrderTotals { count, revenue })
  }
}
