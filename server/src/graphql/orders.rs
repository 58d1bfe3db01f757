// orderdesk/server/src/graphql/orders.rs

use async_graphql::{Context, Object, Result};
use orderdesk::{CreateOrderInput, Order, UpdateOrderInput};

use super::{app_state, caller, gql};

#[derive(Default)]
pub struct OrderQuery;

#[Object]
impl OrderQuery {
  /// Every order for admins, the caller's own orders otherwise. Newest first.
  async fn orders(&self, ctx: &Context<'_>) -> Result<Vec<Order>> {
    let principal = caller(ctx)?;
    app_state(ctx)?.orders.list(&principal).await.map_err(gql)
  }
}

#[derive(Default)]
pub struct OrderMutation;

#[Object]
impl OrderMutation {
  async fn create_order(&self, ctx: &Context<'_>, input: CreateOrderInput) -> Result<Order> {
    let principal = caller(ctx)?;
    app_state(ctx)?.orders.create(&principal, input).await.map_err(gql)
  }

  async fn update_order_status(&self, ctx: &Context<'_>, input: UpdateOrderInput) -> Result<Order> {
    let principal = caller(ctx)?;
    app_state(ctx)?.orders.update_status(&principal, input).await.map_err(gql)
  }
}
