// orderdesk/server/src/graphql/users.rs

use async_graphql::{Context, Object, Result};
use orderdesk::{CreateUserInput, User};

use super::{app_state, caller, gql};

#[derive(Default)]
pub struct UserQuery;

#[Object]
impl UserQuery {
  async fn users(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
    let principal = caller(ctx)?;
    app_state(ctx)?.users.list(&principal).await.map_err(gql)
  }
}

#[derive(Default)]
pub struct UserMutation;

#[Object]
impl UserMutation {
  async fn create_user(&self, ctx: &Context<'_>, input: CreateUserInput) -> Result<User> {
    let principal = caller(ctx)?;
    app_state(ctx)?.users.create(&principal, input).await.map_err(gql)
  }
}
