// orderdesk/src/service/orders.rs

use chrono::Utc;
use futures_util::future::try_join_all;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::analytics::{self, DEFAULT_DATE_WINDOW_DAYS, DEFAULT_TOP_USERS};
use crate::auth::guard::{authorize, Operation};
use crate::auth::principal::Principal;
use crate::error::{DeskError, DeskResult, FieldErrors};
use crate::model::{
  CreateOrderInput, DateStats, NewOrder, Order, OrderStats, OrderStatus, StatusStats, UpdateOrderInput, UserStats,
};
use crate::store::{OrderFilter, OrderStore, UserStore};

#[derive(Clone)]
pub struct OrderService {
  orders: Arc<dyn OrderStore>,
  users: Arc<dyn UserStore>,
}

impl OrderService {
  pub fn new(orders: Arc<dyn OrderStore>, users: Arc<dyn UserStore>) -> Self {
    Self { orders, users }
  }

  /// Admins see every order; everyone else sees their own.
  fn scope(principal: &Principal) -> OrderFilter {
    if principal.is_admin() {
      OrderFilter::all()
    } else {
      OrderFilter::owned_by(principal.user_id)
    }
  }

  #[instrument(
    name = "order_service::create",
    skip(self, principal, input),
    fields(caller = %principal.user_id, order_no = %input.order_no)
  )]
  pub async fn create(&self, principal: &Principal, input: CreateOrderInput) -> DeskResult<Order> {
    authorize(Operation::CreateOrder, principal)?;

    let order_no = input.order_no.trim();
    let mut errors = FieldErrors::new();
    if order_no.is_empty() {
      errors.push("orderNo", "Order number is required");
    }
    if !input.amount.is_finite() || input.amount < 0.0 {
      errors.push("amount", "Amount must be a non-negative number");
    }
    errors.into_result()?;

    // The token may outlive its user row.
    if self.users.find_user(principal.user_id).await?.is_none() {
      warn!("Order creation refused: caller's user row no longer exists.");
      return Err(DeskError::NotFound("User not found".to_string()));
    }

    let order = self
      .orders
      .insert_order(NewOrder {
        order_no: order_no.to_string(),
        amount: input.amount,
        status: input.status.unwrap_or_default(),
        user_id: principal.user_id,
      })
      .await?;
    info!(order_id = %order.id, status = %order.status, "Order created.");
    Ok(order)
  }

  #[instrument(name = "order_service::list", skip(self, principal), fields(caller = %principal.user_id, admin = principal.is_admin()))]
  pub async fn list(&self, principal: &Principal) -> DeskResult<Vec<Order>> {
    authorize(Operation::ListOrders, principal)?;
    let orders = self.orders.list_orders(&Self::scope(principal)).await?;
    debug!(count = orders.len(), "Orders listed.");
    Ok(orders)
  }

  /// Replaces an order's status. Any status may follow any other.
  #[instrument(
    name = "order_service::update_status",
    skip(self, principal, input),
    fields(caller = %principal.user_id, order_id = %input.id, status = %input.status)
  )]
  pub async fn update_status(&self, principal: &Principal, input: UpdateOrderInput) -> DeskResult<Order> {
    authorize(Operation::UpdateOrderStatus, principal)?;

    let existing = self
      .orders
      .find_order(input.id)
      .await?
      .ok_or_else(|| DeskError::NotFound("Order not found".to_string()))?;

    if !principal.can_act_for(existing.user.id) {
      warn!(owner = %existing.user.id, "Status update refused: caller is neither owner nor admin.");
      return Err(DeskError::Forbidden("Not allowed".to_string()));
    }

    let updated = self.orders.update_status(input.id, input.status).await?;
    info!(from = %existing.status, to = %updated.status, "Order status updated.");
    Ok(updated)
  }

  #[instrument(name = "order_service::stats", skip(self, principal), fields(caller = %principal.user_id))]
  pub async fn stats(&self, principal: &Principal) -> DeskResult<OrderStats> {
    authorize(Operation::OrderStats, principal)?;
    let totals = self.orders.summarize(&Self::scope(principal)).await?;
    Ok(OrderStats {
      total_orders: totals.count,
      total_revenue: totals.revenue,
    })
  }

  /// Orders of the last `days` days (default 30) bucketed by UTC calendar day.
  #[instrument(name = "order_service::orders_by_date", skip(self, principal), fields(caller = %principal.user_id))]
  pub async fn orders_by_date(&self, principal: &Principal, days: Option<i32>) -> DeskResult<Vec<DateStats>> {
    authorize(Operation::OrdersByDate, principal)?;
    let days = days.unwrap_or(DEFAULT_DATE_WINDOW_DAYS);
    let days = u32::try_from(days).map_err(|_| DeskError::validation("days", "Days must not be negative"))?;

    let filter = match analytics::window_start(Utc::now(), days) {
      Some(since) => OrderFilter::all().since(since),
      None => OrderFilter::all(),
    };
    let orders = self.orders.list_orders(&filter).await?;
    Ok(analytics::group_by_day(&orders))
  }

  /// One bucket per status, aggregated concurrently.
  #[instrument(name = "order_service::orders_by_status", skip(self, principal), fields(caller = %principal.user_id))]
  pub async fn orders_by_status(&self, principal: &Principal) -> DeskResult<Vec<StatusStats>> {
    authorize(Operation::OrdersByStatus, principal)?;
    let store = &self.orders;
    let per_status = OrderStatus::ALL.into_iter().map(|status| async move {
      let totals = store.summarize(&OrderFilter::all().with_status(status)).await?;
      Ok::<_, DeskError>((status, totals))
    });
    let totals = try_join_all(per_status).await?;
    Ok(analytics::status_breakdown(totals))
  }

  /// The `limit` users (default 10) with the most orders.
  #[instrument(name = "order_service::orders_by_user", skip(self, principal), fields(caller = %principal.user_id))]
  pub async fn orders_by_user(&self, principal: &Principal, limit: Option<i32>) -> DeskResult<Vec<UserStats>> {
    authorize(Operation::OrdersByUser, principal)?;
    let limit = limit.unwrap_or(DEFAULT_TOP_USERS);
    let limit = usize::try_from(limit).map_err(|_| DeskError::validation("limit", "Limit must not be negative"))?;

    let orders = self.orders.list_orders(&OrderFilter::all()).await?;
    Ok(analytics::rank_by_user(&orders, limit))
  }
}
