// orderdesk/server/src/session.rs

//! The session cookie carrying the signed token.

use actix_web::cookie::{time::Duration, Cookie, SameSite};

pub const TOKEN_COOKIE: &str = "token";

/// HTTP-only, same-site strict cookie valid for `ttl`.
pub fn session_cookie(token: &str, ttl: chrono::Duration, secure: bool) -> Cookie<'static> {
  Cookie::build(TOKEN_COOKIE, token.to_string())
    .path("/")
    .http_only(true)
    .same_site(SameSite::Strict)
    .secure(secure)
    .max_age(Duration::seconds(ttl.num_seconds()))
    .finish()
}

/// Overwrites the session cookie with an already expired one.
pub fn cleared_cookie(secure: bool) -> Cookie<'static> {
  Cookie::build(TOKEN_COOKIE, "")
    .path("/")
    .http_only(true)
    .same_site(SameSite::Strict)
    .secure(secure)
    .max_age(Duration::ZERO)
    .finish()
}
