// tests/analytics_query_tests.rs
mod common;

use chrono::{Duration, Utc};
use common::*;
use orderdesk::{CreateOrderInput, DeskError, OrderStatus};

async fn seed_orders(fx: &OrderFixture) {
  let plan = [
    (fx.alice_p(), "A-1", 100.0, OrderStatus::Pending),
    (fx.alice_p(), "A-2", 50.0, OrderStatus::Shipped),
    (fx.alice_p(), "A-3", 25.0, OrderStatus::Shipped),
    (fx.bob_p(), "B-1", 500.0, OrderStatus::Confirmed),
  ];
  for (principal, order_no, amount, status) in plan {
    fx.service
      .create(
        &principal,
        CreateOrderInput {
          order_no: order_no.to_string(),
          amount,
          status: Some(status),
        },
      )
      .await
      .expect("seed order");
  }
}

#[tokio::test]
async fn test_orders_by_date_excludes_orders_outside_window() {
  let fx = OrderFixture::new().await;
  seed_orders(&fx).await;
  let orders = fx.service.list(&fx.admin_p()).await.unwrap();
  let now = Utc::now();
  // A-1 ten days back, A-2 three days back, the rest today.
  for order in &orders {
    match order.order_no.as_str() {
      "A-1" => assert!(fx.store.set_created_at(order.id, now - Duration::days(10))),
      "A-2" => assert!(fx.store.set_created_at(order.id, now - Duration::days(3))),
      _ => {}
    }
  }

  let week = fx.service.orders_by_date(&fx.admin_p(), Some(7)).await.unwrap();
  let oldest_allowed = (now - Duration::days(7)).format("%Y-%m-%d").to_string();
  assert!(week.iter().all(|b| b.date >= oldest_allowed));
  assert_eq!(week.iter().map(|b| b.count).sum::<i64>(), 3);
  assert_eq!(week.len(), 2);
  assert!(week.windows(2).all(|w| w[0].date < w[1].date), "buckets ascend by date");

  let month = fx.service.orders_by_date(&fx.admin_p(), None).await.unwrap();
  assert_eq!(month.iter().map(|b| b.count).sum::<i64>(), 4);
  assert_eq!(month.iter().map(|b| b.revenue).sum::<f64>(), 675.0);
}

#[tokio::test]
async fn test_orders_by_date_with_huge_window_covers_every_order() {
  let fx = OrderFixture::new().await;
  seed_orders(&fx).await;

  let all = fx.service.orders_by_date(&fx.admin_p(), Some(i32::MAX)).await.unwrap();
  assert_eq!(all.iter().map(|b| b.count).sum::<i64>(), 4);
  assert_eq!(all.iter().map(|b| b.revenue).sum::<f64>(), 675.0);
}

#[tokio::test]
async fn test_orders_by_status_always_reports_every_status() {
  let fx = OrderFixture::new().await;

  let empty = fx.service.orders_by_status(&fx.admin_p()).await.unwrap();
  assert_eq!(empty.len(), 4);
  assert!(empty.iter().all(|b| b.count == 0 && b.revenue == 0.0));

  seed_orders(&fx).await;
  let buckets = fx.service.orders_by_status(&fx.admin_p()).await.unwrap();
  let statuses: Vec<OrderStatus> = buckets.iter().map(|b| b.status).collect();
  assert_eq!(statuses, OrderStatus::ALL.to_vec());
  let shipped = buckets.iter().find(|b| b.status == OrderStatus::Shipped).unwrap();
  assert_eq!(shipped.count, 2);
  assert_eq!(shipped.revenue, 75.0);
  let cancelled = buckets.iter().find(|b| b.status == OrderStatus::Cancelled).unwrap();
  assert_eq!(cancelled.count, 0);
}

#[tokio::test]
async fn test_orders_by_user_ranks_by_count_and_honours_limit() {
  let fx = OrderFixture::new().await;
  seed_orders(&fx).await;

  let ranked = fx.service.orders_by_user(&fx.admin_p(), None).await.unwrap();
  assert_eq!(ranked.len(), 2);
  assert_eq!(ranked[0].user_id, fx.alice.id);
  assert_eq!(ranked[0].user_name, "Alice");
  assert_eq!(ranked[0].count, 3);
  assert_eq!(ranked[0].revenue, 175.0);
  assert_eq!(ranked[1].user_id, fx.bob.id);

  let top = fx.service.orders_by_user(&fx.admin_p(), Some(1)).await.unwrap();
  assert_eq!(top.len(), 1);
  let none = fx.service.orders_by_user(&fx.admin_p(), Some(0)).await.unwrap();
  assert!(none.is_empty());
}

#[tokio::test]
async fn test_negative_window_or_limit_is_rejected() {
  let fx = OrderFixture::new().await;

  match fx.service.orders_by_date(&fx.admin_p(), Some(-1)).await {
    Err(DeskError::Validation(fields)) => assert!(fields.has("days")),
    other => panic!("expected validation error, got {:?}", other),
  }
  match fx.service.orders_by_user(&fx.admin_p(), Some(-5)).await {
    Err(DeskError::Validation(fields)) => assert!(fields.has("limit")),
    other => panic!("expected validation error, got {:?}", other),
  }
}

#[tokio::test]
async fn test_grouped_analytics_are_admin_only() {
  let fx = OrderFixture::new().await;
  seed_orders(&fx).await;
  let staff = fx.alice_p();

  assert!(matches!(
    fx.service.orders_by_date(&staff, None).await,
    Err(DeskError::Forbidden(_))
  ));
  assert!(matches!(
    fx.service.orders_by_status(&staff).await,
    Err(DeskError::Forbidden(_))
  ));
  assert!(matches!(
    fx.service.orders_by_user(&staff, None).await,
    Err(DeskError::Forbidden(_))
  ));
  // Totals stay available to staff, scoped to their own orders.
  assert_eq!(fx.service.stats(&staff).await.unwrap().total_orders, 3);
}
