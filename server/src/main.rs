// orderdesk/server/src/main.rs

use actix_web::{App, HttpServer};
use orderdesk_server::config::{AppConfig, LogFormat};
use orderdesk_server::graphql::build_schema;
use orderdesk_server::{bootstrap, telemetry, web};
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  dotenvy::dotenv().ok();
  telemetry::init_tracing(LogFormat::from_env());

  tracing::info!("Starting orderdesk server...");

  // Load application configuration
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg),
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
    }
  };

  let app_state = match bootstrap(app_config.clone()).await {
    Ok(state) => state,
    Err(e) => {
      tracing::error!(error = %e, "Failed to initialise application state.");
      return Err(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()));
    }
  };
  let schema = build_schema(app_state.clone());
  let configure = web::configure_app(app_state, schema);

  let server_address = app_config.bind_address();
  tracing::info!("Attempting to bind server to {}...", server_address);
  if app_config.graphiql_enabled() {
    tracing::info!("GraphiQL available at http://{}/graphql", server_address);
  }

  let cors_config = app_config.clone();
  HttpServer::new(move || {
    App::new()
      .wrap(web::middleware::cors(&cors_config))
      .wrap(web::middleware::security_headers())
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(configure.clone())
  })
  .bind(&server_address)?
  .run()
  .await
}
