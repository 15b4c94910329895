mod config;
mod constants;
mod handlers;
mod state;

use actix_web::{web, App, HttpServer};
use config::ServerConfig;
use state::AppState;
use std::sync::Arc;
use tracing::{error, info, warn};
use xmlcheck::JingValidator;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing with env filter
    // Filter out actix-server worker shutdown messages
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("info")
                    .add_directive("actix_server::worker=warn".parse().unwrap())
                    .add_directive("actix_server::accept=warn".parse().unwrap())
            }),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Starting XML validation server (PID: {})",
        std::process::id()
    );

    let config = ServerConfig::load()?;

    if !config.jar_path.exists() {
        warn!(
            "Validator jar not found at {:?}; uploads will be rejected until it is in place",
            config.jar_path
        );
    }
    if !config.schema_path.exists() {
        warn!("RELAX NG grammar not found at {:?}", config.schema_path);
    }

    let validator = JingValidator::new(
        config.java_bin.clone(),
        config.jar_path.clone(),
        config.schema_path.clone(),
    );
    let state = web::Data::new(AppState::new(Arc::new(validator)));

    let bind_address = config.bind_address();
    info!("Starting server on http://{}", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(handlers::upload::upload)
            .service(handlers::health::health)
    })
    .bind(&bind_address)
    .map_err(|e| {
        error!("Failed to bind to {}: {}", bind_address, e);
        e
    })?
    .run()
    .await
}
