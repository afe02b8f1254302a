//! # Bloglist API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod observability;
mod state;
mod telemetry;

use config::AppConfig;
use observability::RequestLogger;
use state::AppState;
use telemetry::{TelemetryConfig, init_telemetry};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Bloglist API Server on {}:{} ({:?})",
        config.host,
        config.port,
        config.env
    );

    let state = AppState::new(&config).await;
    let testing_routes = config.testing_routes_enabled();
    if testing_routes {
        tracing::warn!("Testing routes mounted at /api/testing");
    }

    HttpServer::new(move || {
        App::new()
            .wrap(RequestLogger)
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(handlers::json_config())
            .configure(|cfg| {
                if testing_routes {
                    handlers::configure_testing_routes(cfg);
                }
            })
            .configure(handlers::configure_routes)
            .default_service(web::to(handlers::unknown_endpoint))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
