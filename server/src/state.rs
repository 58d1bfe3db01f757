// orderdesk/server/src/state.rs

use crate::config::AppConfig;
use orderdesk::{
  AuthService, CatalogService, CatalogStore, OrderService, OrderStore, TokenIssuer, UserService, UserStore,
};
use std::sync::Arc;

/// Services shared by every request. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
  pub config: Arc<AppConfig>,
  pub auth: AuthService,
  pub users: UserService,
  pub orders: OrderService,
  pub catalog: CatalogService,
}

impl AppState {
  /// Wires the services over the given stores. Postgres in production, memory in tests.
  pub fn new(
    config: Arc<AppConfig>,
    user_store: Arc<dyn UserStore>,
    order_store: Arc<dyn OrderStore>,
    catalog: Arc<CatalogStore>,
  ) -> Self {
    let tokens = TokenIssuer::new(config.jwt_secret.as_bytes());
    Self {
      auth: AuthService::new(user_store.clone(), tokens),
      users: UserService::new(user_store.clone()),
      orders: OrderService::new(order_store, user_store),
      catalog: CatalogService::new(catalog),
      config,
    }
  }
}
