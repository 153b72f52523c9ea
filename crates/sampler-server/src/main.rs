//! Main entry point for the Sampler server.
//!
//! This file wires configuration, logging, and graceful shutdown around the
//! HTTP server.

use std::sync::Arc;

use sampler_server::{
    model::{AppState, Configuration},
    startup::{self, GracefulShutdown},
};
use tracing::{error, info};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize configuration and logging
    let configuration = Configuration::new();

    let logging_config = configuration.logging_config();
    let _logging_guard = startup::init_logging(&logging_config)?;

    // Extract configuration parameters
    let server_address = configuration.server_address();
    let server_port = configuration.server_port();
    let shutdown_timeout = configuration.shutdown_timeout();

    // Initialize graceful shutdown handler
    let shutdown_signal = startup::wait_for_shutdown_signal().await;
    let graceful_shutdown = GracefulShutdown::new(shutdown_signal.clone(), shutdown_timeout);

    // Create application state
    let app_state = Arc::new(AppState::new(configuration, shutdown_signal));

    info!(
        "Starting Sampler server on {}:{}",
        server_address, server_port
    );
    let server = startup::api_server(app_state, server_address, server_port)?;

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                error!("Server error: {}", e);
            }
        }
        _ = graceful_shutdown.wait_for_shutdown() => {
            info!("Server shutting down gracefully");
        }
    }

    info!("Sampler server shutdown complete");
    Ok(())
}
