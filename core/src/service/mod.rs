// orderdesk/src/service/mod.rs

//! Application services. Each takes the caller's [`Principal`](crate::Principal)
//! explicitly and checks it against the permission table before touching a store.

pub mod auth;
pub mod catalog;
pub mod orders;
pub mod users;

pub use auth::{AuthService, Session};
pub use catalog::CatalogService;
pub use orders::OrderService;
pub use users::UserService;
