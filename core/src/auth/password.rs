// orderdesk/src/auth/password.rs

//! Password hashing and verification with Argon2.

use crate::error::DeskError;
use argon2::{
  password_hash::{
    rand_core::OsRng, // For generating random salts
    PasswordHash,
    PasswordHasher,
    PasswordVerifier,
    SaltString,
  },
  Argon2,
};
use tracing::{debug, error, instrument};

/// Hashes a plain-text password using Argon2 with default parameters and a random salt.
///
/// # Returns
/// The PHC string of the hash, or `DeskError::Validation` for an empty password.
#[instrument(name = "password::hash_password", skip(password), err(Display))]
pub fn hash_password(password: &str) -> Result<String, DeskError> {
  if password.is_empty() {
    error!("Password hashing refused: password is empty.");
    return Err(DeskError::validation("password", "Password is required"));
  }

  let salt = SaltString::generate(&mut OsRng);
  match Argon2::default().hash_password(password.as_bytes(), &salt) {
    Ok(hash) => {
      debug!("Password hashed successfully.");
      Ok(hash.to_string())
    }
    Err(argon_err) => {
      error!(error = %argon_err, "Argon2 password hashing failed.");
      Err(DeskError::Internal(format!("Password hashing failed: {}", argon_err)))
    }
  }
}

/// Verifies a plain-text password against a stored Argon2 hash.
///
/// # Returns
/// `Ok(true)` on a match and `Ok(false)` on a mismatch. An empty input on either side
/// is reported as the generic credential failure so callers cannot tell it apart from
/// a wrong password. A stored hash that does not parse is an internal error.
#[instrument(
  name = "password::verify_password",
  skip(stored_hash, provided_password),
  err(Display),
  fields(hash_len = stored_hash.len())
)]
pub fn verify_password(stored_hash: &str, provided_password: &str) -> Result<bool, DeskError> {
  if stored_hash.is_empty() || provided_password.is_empty() {
    debug!("Password verification refused: empty hash or password.");
    return Err(DeskError::invalid_credentials());
  }

  let parsed_hash = PasswordHash::new(stored_hash).map_err(|parse_err| {
    error!(error = %parse_err, "Stored password hash does not parse.");
    DeskError::Internal(format!("Invalid stored password hash format: {}", parse_err))
  })?;

  match Argon2::default().verify_password(provided_password.as_bytes(), &parsed_hash) {
    Ok(()) => Ok(true),
    Err(argon2::password_hash::Error::Password) => {
      debug!("Password verification failed: passwords do not match.");
      Ok(false)
    }
    Err(other) => {
      error!(error = %other, "Argon2 password verification encountered an error.");
      Err(DeskError::Internal(format!("Password verification failed: {}", other)))
    }
  }
}
