// orderdesk/server/src/graphql/analytics.rs

use async_graphql::{Context, Object, Result};
use orderdesk::{DateStats, OrderStats, StatusStats, UserStats};

use super::{app_state, caller, gql};

#[derive(Default)]
pub struct AnalyticsQuery;

#[Object]
impl AnalyticsQuery {
  async fn order_stats(&self, ctx: &Context<'_>) -> Result<OrderStats> {
    let principal = caller(ctx)?;
    app_state(ctx)?.orders.stats(&principal).await.map_err(gql)
  }

  /// Orders grouped by date
  async fn orders_by_date(&self, ctx: &Context<'_>, #[graphql(default = 30)] days: i32) -> Result<Vec<DateStats>> {
    let principal = caller(ctx)?;
    app_state(ctx)?
      .orders
      .orders_by_date(&principal, Some(days))
      .await
      .map_err(gql)
  }

  /// Orders grouped by status
  async fn orders_by_status(&self, ctx: &Context<'_>) -> Result<Vec<StatusStats>> {
    let principal = caller(ctx)?;
    app_state(ctx)?.orders.orders_by_status(&principal).await.map_err(gql)
  }

  /// Orders grouped by user
  async fn orders_by_user(&self, ctx: &Context<'_>, #[graphql(default = 10)] limit: i32) -> Result<Vec<UserStats>> {
    let principal = caller(ctx)?;
    app_state(ctx)?
      .orders
      .orders_by_user(&principal, Some(limit))
      .await
      .map_err(gql)
  }
}
