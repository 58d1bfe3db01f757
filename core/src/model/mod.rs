// orderdesk/src/model/mod.rs

//! Data structures for the persisted entities and the analytics buckets derived from them.

pub mod analytics;
pub mod order;
pub mod user;

pub use analytics::{DateStats, OrderStats, StatusStats, UserStats};
pub use order::{CreateOrderInput, NewOrder, Order, OrderStatus, UpdateOrderInput};
pub use user::{CreateUserInput, LoginInput, NewUser, Role, User, UserCredentials};
