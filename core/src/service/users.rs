// orderdesk/src/service/users.rs

use std::sync::Arc;
use tracing::{info, instrument};

use crate::auth::guard::{authorize, Operation};
use crate::auth::password;
use crate::auth::principal::Principal;
use crate::error::{DeskError, DeskResult, FieldErrors};
use crate::model::{CreateUserInput, NewUser, Role, User};
use crate::store::UserStore;
use crate::wizard::rules;

#[derive(Clone)]
pub struct UserService {
  users: Arc<dyn UserStore>,
}

impl UserService {
  pub fn new(users: Arc<dyn UserStore>) -> Self {
    Self { users }
  }

  #[instrument(name = "user_service::list", skip(self, principal), fields(caller = %principal.user_id))]
  pub async fn list(&self, principal: &Principal) -> DeskResult<Vec<User>> {
    authorize(Operation::ListUsers, principal)?;
    self.users.list_users().await
  }

  /// The caller's own user row. Fails with `NotFound` once the row is gone.
  pub async fn current(&self, principal: &Principal) -> DeskResult<User> {
    self
      .users
      .find_user(principal.user_id)
      .await?
      .ok_or_else(|| DeskError::NotFound("User not found".to_string()))
  }

  #[instrument(
    name = "user_service::create",
    skip(self, principal, input),
    fields(caller = %principal.user_id, email = %input.email)
  )]
  pub async fn create(&self, principal: &Principal, input: CreateUserInput) -> DeskResult<User> {
    authorize(Operation::CreateUser, principal)?;
    self.insert(input).await
  }

  /// Creates an admin account with the given email unless one already exists.
  /// Used at startup so a fresh database has someone able to log in.
  #[instrument(name = "user_service::ensure_admin", skip(self, password))]
  pub async fn ensure_admin(&self, name: &str, email: &str, password: &str) -> DeskResult<Option<User>> {
    if self.users.find_credentials(email.trim()).await?.is_some() {
      info!("Seed admin already present.");
      return Ok(None);
    }
    let user = self
      .insert(CreateUserInput {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        role: Some(Role::Admin),
      })
      .await?;
    info!(user_id = %user.id, "Seed admin created.");
    Ok(Some(user))
  }

  async fn insert(&self, input: CreateUserInput) -> DeskResult<User> {
    let name = input.name.trim();
    let email = input.email.trim();
    let mut errors = FieldErrors::new();
    if name.is_empty() {
      errors.push("name", "Name is required");
    }
    if email.is_empty() {
      errors.push("email", "Email is required");
    } else if !rules::is_email(email) {
      errors.push("email", "Please enter a valid email");
    }
    if input.password.is_empty() {
      errors.push("password", "Password is required");
    }
    errors.into_result()?;

    let password_hash = password::hash_password(&input.password)?;
    let user = self
      .users
      .insert_user(NewUser {
        name: name.to_string(),
        email: email.to_string(),
        password_hash,
        role: input.role.unwrap_or_default(),
      })
      .await?;
    info!(user_id = %user.id, role = %user.role, "User created.");
    Ok(user)
  }
}
