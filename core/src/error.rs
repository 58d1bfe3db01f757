// orderdesk/src/error.rs
use anyhow::Error as AnyhowError;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// A single failing input field and the message shown for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "graphql", derive(async_graphql::SimpleObject))]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
  pub field: String,
  pub message: String,
}

/// Every failing field of one input, in the order the fields were checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
  pub fn new() -> Self {
    Self::default()
  }

  /// Shorthand for an input that fails on exactly one field.
  pub fn single(field: &str, message: impl Into<String>) -> Self {
    let mut errors = Self::new();
    errors.push(field, message);
    errors
  }

  /// Records a failure. Only the first message per field is kept.
  pub fn push(&mut self, field: &str, message: impl Into<String>) {
    if self.has(field) {
      return;
    }
    self.0.push(FieldError {
      field: field.to_string(),
      message: message.into(),
    });
  }

  pub fn has(&self, field: &str) -> bool {
    self.0.iter().any(|e| e.field == field)
  }

  pub fn message_for(&self, field: &str) -> Option<&str> {
    self.0.iter().find(|e| e.field == field).map(|e| e.message.as_str())
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
    self.0.iter()
  }

  pub fn into_vec(self) -> Vec<FieldError> {
    self.0
  }

  /// `Ok(())` when nothing failed, otherwise a `DeskError::Validation`.
  pub fn into_result(self) -> DeskResult<()> {
    if self.is_empty() {
      Ok(())
    } else {
      Err(DeskError::Validation(self))
    }
  }
}

impl fmt::Display for FieldErrors {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut first = true;
    for error in &self.0 {
      if !first {
        f.write_str("; ")?;
      }
      write!(f, "{}: {}", error.field, error.message)?;
      first = false;
    }
    Ok(())
  }
}

#[derive(Debug, Error)]
pub enum DeskError {
  /// Missing, invalid or rejected credentials. The message is always generic.
  #[error("Unauthorized: {0}")]
  Unauthorized(String),

  #[error("Forbidden: {0}")]
  Forbidden(String),

  #[error("Not found: {0}")]
  NotFound(String),

  #[error("Validation failed: {0}")]
  Validation(FieldErrors),

  #[error("Conflict: {0}")]
  Conflict(String),

  #[error("Store operation failed. Source: {source}")]
  Store {
    #[source]
    source: AnyhowError,
  },

  #[error("Internal error: {0}")]
  Internal(String),
}

impl DeskError {
  /// The generic rejection used for every login failure.
  pub fn invalid_credentials() -> Self {
    DeskError::Unauthorized("Invalid credentials".to_string())
  }

  pub fn validation(field: &str, message: impl Into<String>) -> Self {
    DeskError::Validation(FieldErrors::single(field, message))
  }

  /// Stable machine-readable code, used for GraphQL error extensions.
  pub fn code(&self) -> &'static str {
    match self {
      DeskError::Unauthorized(_) => "UNAUTHENTICATED",
      DeskError::Forbidden(_) => "FORBIDDEN",
      DeskError::NotFound(_) => "NOT_FOUND",
      DeskError::Validation(_) => "BAD_USER_INPUT",
      DeskError::Conflict(_) => "CONFLICT",
      DeskError::Store { .. } | DeskError::Internal(_) => "INTERNAL_SERVER_ERROR",
    }
  }

  /// Message safe to show a client. Store and internal details stay in the logs.
  pub fn public_message(&self) -> String {
    match self {
      DeskError::Unauthorized(m) | DeskError::Forbidden(m) | DeskError::NotFound(m) | DeskError::Conflict(m) => {
        m.clone()
      }
      DeskError::Validation(errors) => errors.to_string(),
      DeskError::Store { .. } | DeskError::Internal(_) => "Internal server error".to_string(),
    }
  }
}

impl From<AnyhowError> for DeskError {
  fn from(err: AnyhowError) -> Self {
    DeskError::Store { source: err }
  }
}

#[cfg(feature = "graphql")]
impl async_graphql::ErrorExtensions for DeskError {
  fn extend(&self) -> async_graphql::Error {
    use async_graphql::ErrorExtensions as _;

    if matches!(self, DeskError::Store { .. } | DeskError::Internal(_)) {
      tracing::error!(error = %self, "Internal error surfaced to a GraphQL caller.");
    }
    async_graphql::Error::new(self.public_message()).extend_with(|_, e| {
      e.set("code", self.code());
      if let DeskError::Validation(fields) = self {
        let fields_value = serde_json::to_value(fields)
          .ok()
          .and_then(|json| async_graphql::Value::from_json(json).ok());
        if let Some(value) = fields_value {
          e.set("fields", value);
        }
      }
    })
  }
}

pub type DeskResult<T, E = DeskError> = std::result::Result<T, E>;
