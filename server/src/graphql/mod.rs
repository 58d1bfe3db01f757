// orderdesk/server/src/graphql/mod.rs

//! The GraphQL schema. Each domain contributes a query and a mutation object,
//! merged into the two roots.

pub mod analytics;
pub mod auth;
pub mod catalog;
pub mod orders;
pub mod users;
pub mod wizard;

use async_graphql::{Context, EmptySubscription, ErrorExtensions, MergedObject, Schema};
use orderdesk::{authenticate, DeskError, Principal};

use crate::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(
  auth::AuthQuery,
  users::UserQuery,
  orders::OrderQuery,
  analytics::AnalyticsQuery,
  catalog::CatalogQuery,
  wizard::WizardQuery,
);

#[derive(MergedObject, Default)]
pub struct MutationRoot(
  auth::AuthMutation,
  users::UserMutation,
  orders::OrderMutation,
  catalog::CatalogMutation,
  wizard::WizardMutation,
);

pub type DeskSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> DeskSchema {
  Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
    .data(state)
    .finish()
}

/// Converts a domain error into a GraphQL error with `extensions.code`.
pub(crate) fn gql(err: DeskError) -> async_graphql::Error {
  err.extend()
}

pub(crate) fn app_state<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a AppState> {
  ctx.data::<AppState>()
}

/// The request's principal, or `UNAUTHENTICATED` when no valid session cookie was sent.
pub(crate) fn caller(ctx: &Context<'_>) -> async_graphql::Result<Principal> {
  authenticate(ctx.data_opt::<Principal>()).copied().map_err(gql)
}
