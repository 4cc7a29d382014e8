//! USA Top 10 Server - Main entry point

use anyhow::Result;
use std::net::SocketAddr;
use tokio::signal;
use top10_common::logging::{init_logging, LogConfig};
use top10_seeder::store;
use tracing::{error, info};

use top10_server::{config::Config, router, serve, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    let log_config = LogConfig::builder()
        .log_file_prefix("top10-server")
        .filter_directives("top10_server=debug,top10_seeder=info,tower_http=debug,sqlx=warn")
        .build()
        .merge_env()?;

    let _guard = init_logging(&log_config)?;

    info!("Starting USA Top 10 server");

    let config = Config::load()?;
    info!(
        "Configuration loaded - server will bind to {}:{}",
        config.server.host, config.server.port
    );

    let db_pool = store::connect(&config.seeder.database_url).await?;
    let state = AppState::new(db_pool, config.seeder.clone());

    if config.server.refresh_on_start {
        match state.refresh().await {
            Ok(outcome) => info!(records = outcome.records, "Startup refresh complete"),
            // keep serving whatever the store already holds
            Err(e) => error!(error = %e, "Startup refresh failed"),
        }
    }

    let app = router(state, &config.cors);

    let addr: SocketAddr = config.bind_address().parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    serve(listener, app, shutdown_signal()).await?;

    info!("Server shut down gracefully");

    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received terminate signal, starting graceful shutdown");
        },
    }
}
