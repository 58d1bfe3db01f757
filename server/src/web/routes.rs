// orderdesk/server/src/web/routes.rs

use actix_web::web;

use crate::graphql::DeskSchema;
use crate::state::AppState;
use crate::web::handlers::{graphiql_handler, graphql_handler, health_check_handler};

pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .route("/health", web::get().to(health_check_handler))
    .service(
      web::resource("/graphql")
        .route(web::post().to(graphql_handler))
        .route(web::get().to(graphiql_handler)),
    );
}

/// Shares `state` and `schema` with the handlers and registers the routes.
/// The returned closure is called once per worker.
pub fn configure_app(state: AppState, schema: DeskSchema) -> impl Fn(&mut web::ServiceConfig) + Clone + Send + 'static {
  move |cfg: &mut web::ServiceConfig| {
    cfg
      .app_data(web::Data::new(state.clone()))
      .app_data(web::Data::new(schema.clone()));
    configure_app_routes(cfg);
  }
}
