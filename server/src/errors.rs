// orderdesk/server/src/errors.rs

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use orderdesk::DeskError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Migration Error: {0}")]
  Migration(#[from] sqlx::migrate::MigrateError),

  #[error("I/O Error: {0}")]
  Io(#[from] std::io::Error),

  #[error(transparent)]
  Domain(#[from] DeskError),
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Domain(DeskError::Unauthorized(_)) => StatusCode::UNAUTHORIZED,
      AppError::Domain(DeskError::Forbidden(_)) => StatusCode::FORBIDDEN,
      AppError::Domain(DeskError::NotFound(_)) => StatusCode::NOT_FOUND,
      AppError::Domain(DeskError::Validation(_)) => StatusCode::BAD_REQUEST,
      AppError::Domain(DeskError::Conflict(_)) => StatusCode::CONFLICT,
      _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");
    let body = match self {
      AppError::Domain(e) => json!({ "error": e.public_message(), "code": e.code() }),
      AppError::Config(_) => json!({ "error": "Configuration issue", "code": "INTERNAL_SERVER_ERROR" }),
      AppError::Sqlx(_) | AppError::Migration(_) => {
        json!({ "error": "Database operation failed", "code": "INTERNAL_SERVER_ERROR" })
      }
      AppError::Io(_) => json!({ "error": "An internal error occurred", "code": "INTERNAL_SERVER_ERROR" }),
    };
    HttpResponse::build(self.status_code()).json(body)
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
