//! Civilization draft API server entry point.

use std::error::Error;

use civdraft_api::config::AppConfig;
use civdraft_api::routes;
use civdraft_api::state::AppState;
use civdraft_api::telemetry;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Read configuration from environment.
    let config = AppConfig::from_env()?;

    let telemetry = telemetry::init(config.otlp_endpoint.as_deref())?;

    tracing::info!("Starting civilization draft server");

    // Build application state.
    let app_state = AppState::from_config(&config)?;
    tracing::info!(
        civilizations = app_state.catalog.len(),
        min_players = app_state.limits.min(),
        max_players = app_state.limits.max(),
        seeded = config.rng_seed.is_some(),
        "catalog ready"
    );

    // Build router.
    let app = routes::router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server.
    let addr = config.bind_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    telemetry.shutdown();

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutting down");
}
