use anyhow::Result;
use tokio::net::TcpListener;
use tokio::signal;

use animal_service::animal::create_animal_store;
use animal_service::config::{Settings, StoreBackend};
use animal_service::postgres::PostgresPool;
use animal_service::server::{create_app, AppState};
use animal_service::telemetry::init_telemetry;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let settings = Settings::new()?;

    // Initialize tracing
    let telemetry = init_telemetry(&settings.otel)?;
    tracing::info!(
        store = ?settings.store.backend,
        otlp = telemetry.exporting(),
        "Configuration loaded"
    );

    // Failing to reach the database is fatal
    let postgres_pool = match settings.store.backend {
        StoreBackend::Postgres => Some(PostgresPool::connect(&settings.database).await?),
        StoreBackend::Memory => None,
    };

    let store = create_animal_store(&settings.store, postgres_pool.as_ref());
    store.ensure_schema().await?;

    let app = create_app(AppState::new(store));

    // Start server
    let addr = settings.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(pool) = postgres_pool {
        pool.close().await;
    }

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        }
    }
}
