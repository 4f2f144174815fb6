use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::{info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    info!("Connecting to MongoDB at {}", config.mongodb.redacted_url());

    // Keep serving when MongoDB is down at startup: the driver reconnects
    // lazily, store operations fail with 500 and /ready reports 503.
    let mongo_client =
        match database::mongodb::connect_from_config_with_retry(&config.mongodb, None).await {
            Ok(client) => {
                info!(
                    "Successfully connected to MongoDB database: {}",
                    config.mongodb.database()
                );
                client
            }
            Err(e) => {
                warn!(
                    error = %e,
                    "MongoDB unreachable at startup, continuing without a verified connection"
                );
                database::mongodb::client_from_config(&config.mongodb).await?
            }
        };

    let db = mongo_client.database(config.mongodb.database());

    let state = AppState {
        config,
        mongo_client,
        db,
    };

    let api_routes = api::routes(&state);

    let app = axum_helpers::create_router::<openapi::ApiDoc>(api_routes)?;

    info!("Starting Items API with graceful shutdown (30s timeout)");

    let mongo_client = state.mongo_client.clone();

    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        // Runs once in-flight requests have drained
        async move {
            info!("Shutting down: closing MongoDB connections");
            mongo_client.shutdown().await;
            info!("MongoDB connection closed successfully");
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Items API shutdown complete");
    Ok(())
}
