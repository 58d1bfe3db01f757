// orderdesk/src/model/user.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Coarse access level. `USER` is accepted as a legacy spelling of `STAFF`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "graphql", derive(async_graphql::Enum))]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(type_name = "user_role", rename_all = "SCREAMING_SNAKE_CASE"))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
  Admin,
  #[default]
  #[serde(alias = "USER")]
  Staff,
}

impl Role {
  pub fn as_str(&self) -> &'static str {
    match self {
      Role::Admin => "ADMIN",
      Role::Staff => "STAFF",
    }
  }

  pub fn is_admin(&self) -> bool {
    matches!(self, Role::Admin)
  }
}

impl fmt::Display for Role {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A user as seen by clients. The password hash lives in `UserCredentials` only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "graphql", derive(async_graphql::SimpleObject))]
#[serde(rename_all = "camelCase")]
pub struct User {
  pub id: Uuid,
  pub name: String,
  pub email: String,
  pub role: Role,
  pub is_active: bool,
  pub created_at: DateTime<Utc>,
}

/// A user together with its stored argon2 hash, used only by the login flow.
#[derive(Debug, Clone)]
pub struct UserCredentials {
  pub user: User,
  pub password_hash: String,
}

/// Row to insert. The password has already been hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
  pub name: String,
  pub email: String,
  pub password_hash: String,
  pub role: Role,
}

#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(feature = "graphql", derive(async_graphql::InputObject))]
#[serde(rename_all = "camelCase")]
pub struct CreateUserInput {
  pub name: String,
  pub email: String,
  pub password: String,
  pub role: Option<Role>,
}

#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(feature = "graphql", derive(async_graphql::InputObject))]
pub struct LoginInput {
  pub email: String,
  pub password: String,
}
