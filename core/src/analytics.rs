// orderdesk/src/analytics.rs

//! Grouping helpers behind the analytics queries. All functions are pure so the
//! service layer can feed them rows from any store.

use chrono::{DateTime, Datelike, Duration, Utc};
use std::collections::{BTreeMap, HashMap};
use uuid::Uuid;

use crate::model::{DateStats, Order, OrderStatus, StatusStats, UserStats};
use crate::store::OrderTotals;

pub const DEFAULT_DATE_WINDOW_DAYS: i32 = 30;
pub const DEFAULT_TOP_USERS: i32 = 10;

/// Start of a window covering the last `days` days, measured from `now`.
///
/// `None` when the window reaches back past year 1, which every store treats as unbounded.
pub fn window_start(now: DateTime<Utc>, days: u32) -> Option<DateTime<Utc>> {
  now
    .checked_sub_signed(Duration::days(i64::from(days)))
    .filter(|start| start.year() >= 1)
}

/// Buckets orders by the UTC calendar day of their creation, ascending.
pub fn group_by_day<'a, I>(orders: I) -> Vec<DateStats>
where
  I: IntoIterator<Item = &'a Order>,
{
  let mut buckets: BTreeMap<String, (i64, f64)> = BTreeMap::new();
  for order in orders {
    let day = order.created_at.format("%Y-%m-%d").to_string();
    let entry = buckets.entry(day).or_insert((0, 0.0));
    entry.0 += 1;
    entry.1 += order.amount;
  }
  buckets
    .into_iter()
    .map(|(date, (count, revenue))| DateStats { date, count, revenue })
    .collect()
}

/// Pairs each status with its totals, zero-filling statuses that have none.
pub fn status_breakdown(totals: impl IntoIterator<Item = (OrderStatus, OrderTotals)>) -> Vec<StatusStats> {
  let mut by_status: HashMap<OrderStatus, OrderTotals> = totals.into_iter().collect();
  OrderStatus::ALL
    .iter()
    .map(|status| {
      let t = by_status.remove(status).unwrap_or_default();
      StatusStats {
        status: *status,
        count: t.count,
        revenue: t.revenue,
      }
    })
    .collect()
}

/// Groups orders by owner and keeps the `limit` owners with the most orders.
///
/// Ties on count fall back to revenue (descending), then user name, so the ranking
/// is deterministic.
pub fn rank_by_user<'a, I>(orders: I, limit: usize) -> Vec<UserStats>
where
  I: IntoIterator<Item = &'a Order>,
{
  let mut grouped: HashMap<Uuid, UserStats> = HashMap::new();
  for order in orders {
    let entry = grouped.entry(order.user.id).or_insert_with(|| UserStats {
      user_id: order.user.id,
      user_name: if order.user.name.is_empty() {
        "Unknown".to_string()
      } else {
        order.user.name.clone()
      },
      count: 0,
      revenue: 0.0,
    });
    entry.count += 1;
    entry.revenue += order.amount;
  }

  let mut ranked: Vec<UserStats> = grouped.into_values().collect();
  ranked.sort_by(|a, b| {
    b.count
      .cmp(&a.count)
      .then_with(|| b.revenue.total_cmp(&a.revenue))
      .then_with(|| a.user_name.cmp(&b.user_name))
  });
  ranked.truncate(limit);
  ranked
}
