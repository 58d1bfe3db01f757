// orderdesk/server/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_JWT_SECRET: &str = "default-secret-change-in-production";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
  Development,
  Test,
  Production,
}

impl AppEnv {
  pub fn is_production(&self) -> bool {
    matches!(self, AppEnv::Production)
  }
}

impl FromStr for AppEnv {
  type Err = AppError;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "development" | "dev" => Ok(AppEnv::Development),
      "test" => Ok(AppEnv::Test),
      "production" | "prod" => Ok(AppEnv::Production),
      other => Err(AppError::Config(format!("Invalid APP_ENV '{}'", other))),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
  Pretty,
  Json,
}

impl LogFormat {
  /// `json` selects JSON lines; anything else, or nothing, is pretty output.
  pub fn parse(value: Option<&str>) -> Self {
    match value.map(|v| v.trim().to_ascii_lowercase()) {
      Some(v) if v == "json" => LogFormat::Json,
      _ => LogFormat::Pretty,
    }
  }

  /// Reads `LOG_FORMAT` on its own so tracing can start before `AppConfig` is loaded.
  pub fn from_env() -> Self {
    Self::parse(env::var("LOG_FORMAT").ok().as_deref())
  }
}

#[derive(Clone)]
pub struct SeedAdmin {
  pub name: String,
  pub email: String,
  pub password: String,
}

impl fmt::Debug for SeedAdmin {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SeedAdmin")
      .field("name", &self.name)
      .field("email", &self.email)
      .field("password", &"[REDACTED]")
      .finish()
  }
}

#[derive(Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database_url: String,
  pub jwt_secret: String,
  pub cors_origin: String,
  pub app_env: AppEnv,
  pub catalog_seed_path: Option<PathBuf>,
  pub seed_admin: Option<SeedAdmin>,
}

impl fmt::Debug for AppConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("AppConfig")
      .field("server_host", &self.server_host)
      .field("server_port", &self.server_port)
      .field("database_url", &"[REDACTED]")
      .field("jwt_secret", &"[REDACTED]")
      .field("cors_origin", &self.cors_origin)
      .field("app_env", &self.app_env)
      .field("catalog_seed_path", &self.catalog_seed_path)
      .field("seed_admin", &self.seed_admin)
      .finish()
  }
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|key| env::var(key).ok())
  }

  /// Builds the config from an arbitrary key lookup. `from_env` passes the process environment.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get_env = |var_name: &str| {
      lookup(var_name)
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::Config(format!("Missing environment variable '{}'", var_name)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("PORT")
      .unwrap_or_else(|_| "4000".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid PORT: {}", e)))?;
    let database_url = get_env("DATABASE_URL")?;
    let app_env = get_env("APP_ENV")
      .unwrap_or_else(|_| "development".to_string())
      .parse::<AppEnv>()?;

    let jwt_secret = match get_env("JWT_SECRET") {
      Ok(secret) => secret,
      Err(_) => {
        tracing::warn!("JWT_SECRET is not set; falling back to the built-in development secret.");
        DEFAULT_JWT_SECRET.to_string()
      }
    };
    if app_env.is_production() && jwt_secret == DEFAULT_JWT_SECRET {
      tracing::warn!("Running in production with the default JWT secret.");
    }

    let cors_origin = get_env("CORS_ORIGIN").unwrap_or_else(|_| "http://localhost:5173".to_string());
    let catalog_seed_path = get_env("CATALOG_SEED_PATH").ok().map(PathBuf::from);

    let seed_admin = match (get_env("SEED_ADMIN_EMAIL"), get_env("SEED_ADMIN_PASSWORD")) {
      (Ok(email), Ok(password)) => Some(SeedAdmin {
        name: get_env("SEED_ADMIN_NAME").unwrap_or_else(|_| "Administrator".to_string()),
        email,
        password,
      }),
      (Ok(_), Err(_)) => {
        return Err(AppError::Config(
          "SEED_ADMIN_EMAIL is set but SEED_ADMIN_PASSWORD is missing".to_string(),
        ))
      }
      _ => None,
    };

    tracing::info!(env = ?app_env, port = server_port, "Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      database_url,
      jwt_secret,
      cors_origin,
      app_env,
      catalog_seed_path,
      seed_admin,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }

  /// Session cookies carry `Secure` only in production.
  pub fn secure_cookies(&self) -> bool {
    self.app_env.is_production()
  }

  pub fn graphiql_enabled(&self) -> bool {
    !self.app_env.is_production()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    AppConfig::from_lookup(|key| vars.get(key).cloned())
  }

  #[test]
  fn defaults_apply_when_only_database_url_is_set() {
    let cfg = config_from(&[("DATABASE_URL", "postgres://localhost/orderdesk")]).unwrap();
    assert_eq!(cfg.server_port, 4000);
    assert_eq!(cfg.server_host, "127.0.0.1");
    assert_eq!(cfg.jwt_secret, DEFAULT_JWT_SECRET);
    assert_eq!(cfg.cors_origin, "http://localhost:5173");
    assert_eq!(cfg.app_env, AppEnv::Development);
    assert!(!cfg.secure_cookies());
    assert!(cfg.graphiql_enabled());
    assert!(cfg.seed_admin.is_none());
  }

  #[test]
  fn missing_database_url_is_an_error() {
    assert!(matches!(config_from(&[]), Err(AppError::Config(_))));
  }

  #[test]
  fn invalid_port_and_env_are_rejected() {
    let bad_port = config_from(&[("DATABASE_URL", "postgres://x"), ("PORT", "http")]);
    assert!(matches!(bad_port, Err(AppError::Config(_))));
    let bad_env = config_from(&[("DATABASE_URL", "postgres://x"), ("APP_ENV", "staging")]);
    assert!(matches!(bad_env, Err(AppError::Config(_))));
  }

  #[test]
  fn production_enables_secure_cookies_and_hides_graphiql() {
    let cfg = config_from(&[
      ("DATABASE_URL", "postgres://x"),
      ("APP_ENV", "production"),
      ("JWT_SECRET", "real-secret"),
    ])
    .unwrap();
    assert!(cfg.secure_cookies());
    assert!(!cfg.graphiql_enabled());
    assert!(!format!("{:?}", cfg).contains("real-secret"));
  }

  #[test]
  fn log_format_defaults_to_pretty() {
    assert_eq!(LogFormat::parse(Some(" JSON ")), LogFormat::Json);
    assert_eq!(LogFormat::parse(Some("text")), LogFormat::Pretty);
    assert_eq!(LogFormat::parse(None), LogFormat::Pretty);
  }

  #[test]
  fn seed_admin_needs_a_password() {
    let partial = config_from(&[("DATABASE_URL", "postgres://x"), ("SEED_ADMIN_EMAIL", "a@b.co")]);
    assert!(partial.is_err());
    let full = config_from(&[
      ("DATABASE_URL", "postgres://x"),
      ("SEED_ADMIN_EMAIL", "a@b.co"),
      ("SEED_ADMIN_PASSWORD", "pw"),
    ])
    .unwrap();
    assert_eq!(full.seed_admin.map(|s| s.name), Some("Administrator".to_string()));
  }
}
