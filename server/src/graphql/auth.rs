// orderdesk/server/src/graphql/auth.rs

use async_graphql::{Context, Object, Result};
use orderdesk::{LoginInput, User};
use tracing::info;

use super::{app_state, caller, gql};
use crate::session;

#[derive(Default)]
pub struct AuthQuery;

#[Object]
impl AuthQuery {
  /// The signed-in user.
  async fn me(&self, ctx: &Context<'_>) -> Result<User> {
    let principal = caller(ctx)?;
    app_state(ctx)?.users.current(&principal).await.map_err(gql)
  }
}

#[derive(Default)]
pub struct AuthMutation;

#[Object]
impl AuthMutation {
  /// Checks credentials and sets the session cookie.
  async fn login(&self, ctx: &Context<'_>, input: LoginInput) -> Result<User> {
    let state = app_state(ctx)?;
    let session = state.auth.login(&input).await.map_err(gql)?;
    let cookie = session::session_cookie(&session.token, state.auth.tokens().ttl(), state.config.secure_cookies());
    ctx.append_http_header("Set-Cookie", cookie.to_string());
    Ok(session.user)
  }

  /// Clears the session cookie. Always succeeds.
  async fn logout(&self, ctx: &Context<'_>) -> Result<bool> {
    let state = app_state(ctx)?;
    ctx.append_http_header("Set-Cookie", session::cleared_cookie(state.config.secure_cookies()).to_string());
    info!("Session cookie cleared.");
    Ok(true)
  }
}
