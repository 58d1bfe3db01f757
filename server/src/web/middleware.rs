// orderdesk/server/src/web/middleware.rs

use actix_cors::Cors;
use actix_web::middleware::DefaultHeaders;

use crate::config::AppConfig;

/// Single allowed origin with credentials, as the browser client sends the session cookie.
pub fn cors(config: &AppConfig) -> Cors {
  Cors::default()
    .allowed_origin(&config.cors_origin)
    .supports_credentials()
    .allowed_methods(vec!["GET", "POST", "OPTIONS"])
    .allowed_headers(vec!["Content-Type", "Authorization", "X-CSRF-Token"])
    .max_age(3600)
}

pub fn security_headers() -> DefaultHeaders {
  DefaultHeaders::new()
    .add(("X-Content-Type-Options", "nosniff"))
    .add(("X-Frame-Options", "DENY"))
    .add(("Referrer-Policy", "no-referrer"))
}
