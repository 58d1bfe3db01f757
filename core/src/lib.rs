// src/lib.rs

//! Orderdesk: the domain core of an order-management backend.
//!
//! The crate is transport-agnostic. It provides:
//!  - Domain models for users, orders and analytics buckets.
//!  - Authentication primitives: argon2 password hashing, signed session tokens,
//!    and an explicit `Principal` checked against a per-operation permission table.
//!  - Async store traits (`UserStore`, `OrderStore`) with an in-memory implementation.
//!  - Services that implement login, user management, order CRUD and the grouped analytics.
//!  - An in-memory catalog (service -> package -> activity) with cascading deletes.
//!  - Validation and pricing for the two-step campaign order wizard.
//!
//! Enable the `graphql` feature to derive async-graphql types on the models, and the
//! `db` feature to derive `sqlx::Type` on the enums persisted as Postgres enum types.

pub mod analytics;
pub mod auth;
pub mod catalog;
pub mod error;
pub mod model;
pub mod service;
pub mod store;
pub mod wizard;

// --- Re-exports for the Public API ---

pub use crate::auth::guard::{authenticate, authorize, Operation};
pub use crate::auth::principal::Principal;
pub use crate::auth::token::{TokenClaims, TokenIssuer};

pub use crate::catalog::CatalogStore;
pub use crate::wizard::{CampaignOrder, CampaignStatus, ClientDetails, ServiceSelection};

pub use crate::error::{DeskError, DeskResult, FieldError, FieldErrors};

pub use crate::model::{
  CreateOrderInput, CreateUserInput, DateStats, LoginInput, Order, OrderStats, OrderStatus, Role, StatusStats,
  UpdateOrderInput, User, UserStats,
};

pub use crate::service::{AuthService, CatalogService, OrderService, Session, UserService};

pub use crate::store::memory::MemoryStore;
pub use crate::store::{OrderFilter, OrderStore, OrderTotals, UserStore};
