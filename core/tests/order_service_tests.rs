// tests/order_service_tests.rs
mod common;

use common::*;
use orderdesk::{CreateOrderInput, DeskError, Order, OrderService, OrderStatus, UpdateOrderInput};
use uuid::Uuid;

fn new_order(order_no: &str, amount: f64) -> CreateOrderInput {
  CreateOrderInput {
    order_no: order_no.to_string(),
    amount,
    status: None,
  }
}

async fn place(service: &OrderService, principal: &orderdesk::Principal, order_no: &str, amount: f64) -> Order {
  service.create(principal, new_order(order_no, amount)).await.expect("create order")
}

#[tokio::test]
async fn test_create_defaults_to_pending_and_links_caller() {
  let fx = OrderFixture::new().await;

  let order = place(&fx.service, &fx.alice_p(), " ORD-1 ", 120.5).await;

  assert_eq!(order.order_no, "ORD-1");
  assert_eq!(order.status, OrderStatus::Pending);
  assert_eq!(order.user.id, fx.alice.id);
  assert_eq!(order.user.name, "Alice");
}

#[tokio::test]
async fn test_create_rejects_bad_input() {
  let fx = OrderFixture::new().await;

  match fx.service.create(&fx.alice_p(), new_order("", -3.0)).await {
    Err(DeskError::Validation(fields)) => {
      assert!(fields.has("orderNo"));
      assert!(fields.has("amount"));
    }
    other => panic!("expected validation error, got {:?}", other),
  }
}

#[tokio::test]
async fn test_create_for_deleted_user_is_not_found() {
  let fx = OrderFixture::new().await;
  let ghost = orderdesk::Principal::new(Uuid::new_v4(), orderdesk::Role::Staff);

  let err = fx.service.create(&ghost, new_order("ORD-9", 1.0)).await.unwrap_err();
  assert!(matches!(err, DeskError::NotFound(_)));
}

#[tokio::test]
async fn test_staff_sees_only_own_orders_and_admin_sees_all() {
  let fx = OrderFixture::new().await;
  place(&fx.service, &fx.alice_p(), "A-1", 10.0).await;
  place(&fx.service, &fx.alice_p(), "A-2", 20.0).await;
  place(&fx.service, &fx.bob_p(), "B-1", 30.0).await;

  let alice_orders = fx.service.list(&fx.alice_p()).await.unwrap();
  assert_eq!(alice_orders.len(), 2);
  assert!(alice_orders.iter().all(|o| o.user.id == fx.alice.id));
  // newest first
  assert_eq!(alice_orders[0].order_no, "A-2");

  let all = fx.service.list(&fx.admin_p()).await.unwrap();
  assert_eq!(all.len(), 3);

  let alice_stats = fx.service.stats(&fx.alice_p()).await.unwrap();
  assert_eq!(alice_stats.total_orders, 2);
  assert_eq!(alice_stats.total_revenue, 30.0);
  let admin_stats = fx.service.stats(&fx.admin_p()).await.unwrap();
  assert_eq!(admin_stats.total_orders, 3);
  assert_eq!(admin_stats.total_revenue, 60.0);
}

#[tokio::test]
async fn test_update_status_respects_ownership() {
  let fx = OrderFixture::new().await;
  let order = place(&fx.service, &fx.alice_p(), "A-1", 10.0).await;

  let err = fx
    .service
    .update_status(
      &fx.bob_p(),
      UpdateOrderInput {
        id: order.id,
        status: OrderStatus::Cancelled,
      },
    )
    .await
    .unwrap_err();
  assert!(matches!(&err, DeskError::Forbidden(msg) if msg == "Not allowed"));

  let shipped = fx
    .service
    .update_status(
      &fx.alice_p(),
      UpdateOrderInput {
        id: order.id,
        status: OrderStatus::Shipped,
      },
    )
    .await
    .expect("owner may update");
  assert_eq!(shipped.status, OrderStatus::Shipped);

  // Transitions are unconstrained: an admin can move a shipped order back to pending.
  let reopened = fx
    .service
    .update_status(
      &fx.admin_p(),
      UpdateOrderInput {
        id: order.id,
        status: OrderStatus::Pending,
      },
    )
    .await
    .expect("admin may update");
  assert_eq!(reopened.status, OrderStatus::Pending);
}

#[tokio::test]
async fn test_update_missing_order_is_not_found() {
  let fx = OrderFixture::new().await;

  let err = fx
    .service
    .update_status(
      &fx.admin_p(),
      UpdateOrderInput {
        id: Uuid::new_v4(),
        status: OrderStatus::Confirmed,
      },
    )
    .await
    .unwrap_err();
  assert!(matches!(&err, DeskError::NotFound(msg) if msg == "Order not found"));
  assert_eq!(err.code(), "NOT_FOUND");
}
