//! # Blog API
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use config::AppConfig;
use middleware::cors::Cors;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!("Starting Blog API on {}:{}", config.host, config.port);

    if config.access.admin_key.is_none() {
        tracing::warn!("ADMIN_API_KEY not set. Mutating routes will answer 500.");
    }

    let state = AppState::new(&config);
    let access = web::Data::new(config.access.clone());
    let allowed_origins = config.access.allowed_origins.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::new(allowed_origins.clone()))
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(access.clone())
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
