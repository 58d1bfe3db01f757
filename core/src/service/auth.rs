// orderdesk/src/service/auth.rs

use std::sync::Arc;
use tracing::{event, instrument, warn, Level};

use crate::auth::password;
use crate::auth::principal::Principal;
use crate::auth::token::TokenIssuer;
use crate::error::{DeskError, DeskResult, FieldErrors};
use crate::model::{LoginInput, User};
use crate::store::UserStore;

/// Result of a successful login: the user and the token the HTTP layer puts in a cookie.
#[derive(Debug, Clone)]
pub struct Session {
  pub user: User,
  pub token: String,
}

#[derive(Clone)]
pub struct AuthService {
  users: Arc<dyn UserStore>,
  tokens: TokenIssuer,
}

impl AuthService {
  pub fn new(users: Arc<dyn UserStore>, tokens: TokenIssuer) -> Self {
    Self { users, tokens }
  }

  pub fn tokens(&self) -> &TokenIssuer {
    &self.tokens
  }

  /// Decodes a session token. Any invalid token simply yields no principal.
  pub fn principal_from_token(&self, token: &str) -> Option<Principal> {
    self.tokens.principal(token).ok()
  }

  /// Checks credentials and issues a session token.
  ///
  /// Unknown emails, inactive accounts and wrong passwords all fail with the same
  /// `Unauthorized("Invalid credentials")`.
  #[instrument(name = "auth_service::login", skip(self, input), fields(email = %input.email))]
  pub async fn login(&self, input: &LoginInput) -> DeskResult<Session> {
    // Step 1: validate input
    let email = input.email.trim();
    let mut errors = FieldErrors::new();
    if email.is_empty() {
      errors.push("email", "Email is required");
    }
    if input.password.is_empty() {
      errors.push("password", "Password is required");
    }
    errors.into_result()?;

    // Step 2: fetch user by email
    let credentials = match self.users.find_credentials(email).await? {
      Some(creds) if creds.user.is_active => creds,
      Some(creds) => {
        warn!(user_id = %creds.user.id, "Login refused: account is inactive.");
        return Err(DeskError::invalid_credentials());
      }
      None => {
        warn!("Login refused: no user with this email.");
        return Err(DeskError::invalid_credentials());
      }
    };

    // Step 3: verify password
    match password::verify_password(&credentials.password_hash, &input.password) {
      Ok(true) => event!(Level::DEBUG, user_id = %credentials.user.id, "Password verified."),
      Ok(false) => {
        warn!(user_id = %credentials.user.id, "Login refused: password mismatch.");
        return Err(DeskError::invalid_credentials());
      }
      Err(e) => return Err(e),
    }

    // Step 4: issue session token
    let token = self.tokens.issue(&credentials.user)?;
    event!(Level::INFO, user_id = %credentials.user.id, role = %credentials.user.role, "Session issued.");
    Ok(Session {
      user: credentials.user,
      token,
    })
  }
}
