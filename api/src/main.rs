use actix_web::{web, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::info;

use relay_api::{create_app, telemetry, AppConfig, AppState};
use relay_core::services::OtpSweeper;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    telemetry::init_tracing(&config.logging).context("Failed to initialize tracing")?;

    info!(
        environment = %config.environment,
        channel = %config.channel.provider,
        ttl_seconds = config.store.ttl_seconds,
        "Starting OTP relay"
    );

    let state = AppState::from_config(&config);

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let sweeper = Arc::new(OtpSweeper::new(state.store(), config.sweeper.clone()));
    let sweeper_task = sweeper.start_background_task(shutdown_rx);

    let app_state = web::Data::new(state);
    let max_payload_size = config.server.max_payload_size;
    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(app_state.clone(), max_payload_size))
        .keep_alive(Duration::from_secs(config.server.keep_alive));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await
        .context("HTTP server error")?;

    info!("HTTP server stopped, shutting down sweeper");
    // receivers may already be gone if the sweeper is disabled
    let _ = shutdown_tx.send(true);
    if let Some(task) = sweeper_task {
        task.await.ok();
    }

    Ok(())
}
