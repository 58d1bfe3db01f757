// orderdesk/server/src/web/handlers.rs

use actix_web::{web, HttpRequest, HttpResponse};
use async_graphql::http::GraphiQLSource;
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};
use tracing::{debug, instrument};

use crate::graphql::DeskSchema;
use crate::session::TOKEN_COOKIE;
use crate::state::AppState;

/// Executes a GraphQL request. A valid `token` cookie attaches the caller's principal;
/// a missing or invalid one leaves the request unauthenticated.
#[instrument(name = "handler::graphql", skip_all)]
pub async fn graphql_handler(
  app_state: web::Data<AppState>,
  schema: web::Data<DeskSchema>,
  http_req: HttpRequest,
  gql_req: GraphQLRequest,
) -> GraphQLResponse {
  let mut request = gql_req.into_inner();
  let principal = http_req
    .cookie(TOKEN_COOKIE)
    .and_then(|cookie| app_state.auth.principal_from_token(cookie.value()));
  match principal {
    Some(principal) => {
      debug!(user_id = %principal.user_id, role = %principal.role, "Session cookie accepted.");
      request = request.data(principal);
    }
    None => debug!("Anonymous GraphQL request."),
  }
  schema.execute(request).await.into()
}

/// GraphiQL playground. Not served in production.
pub async fn graphiql_handler(app_state: web::Data<AppState>) -> HttpResponse {
  if !app_state.config.graphiql_enabled() {
    return HttpResponse::NotFound().finish();
  }
  HttpResponse::Ok()
    .content_type("text/html; charset=utf-8")
    .body(GraphiQLSource::build().endpoint("/graphql").finish())
}

pub async fn health_check_handler() -> HttpResponse {
  HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}
