//! HTTP server initialization and runtime setup.
//!
//! Handles storage selection, service wiring, and the Axum server lifecycle.

use crate::application::services::LinkService;
use crate::config::{Config, StorageBackend};
use crate::domain::repositories::LinkRepository;
use crate::infrastructure::persistence::{MemoryLinkRepository, PgLinkRepository, pg_pool};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the link repository selected by `config.storage_backend`.
///
/// # Errors
///
/// Returns an error if the PostgreSQL backend is selected and the database
/// cannot be reached or migrated.
pub async fn build_link_repository(config: &Config) -> Result<Arc<dyn LinkRepository>> {
    match config.storage_backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; links are lost on restart");
            Ok(Arc::new(MemoryLinkRepository::new()))
        }
        StorageBackend::Postgres => {
            let pool = pg_pool::connect(config).await?;
            tracing::info!("Connected to database");
            Ok(Arc::new(PgLinkRepository::new(Arc::new(pool))))
        }
    }
}

/// Wires a link service on top of the configured storage.
///
/// # Errors
///
/// Returns an error if the shortener parameters are invalid or storage
/// cannot be initialised.
pub async fn build_link_service(
    config: &Config,
) -> Result<(Arc<LinkService<dyn LinkRepository>>, Arc<dyn LinkRepository>)> {
    let shortener_config = config.shortener_config()?;
    let link_repository = build_link_repository(config).await?;
    let link_service = Arc::new(LinkService::new(link_repository.clone(), shortener_config));

    Ok((link_service, link_repository))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Link storage (in-memory or PostgreSQL with migrations)
/// - Link service
/// - Axum HTTP server with graceful shutdown on Ctrl+C / SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - Storage initialisation fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let (link_service, link_repository) = build_link_service(&config).await?;

    let state = AppState::new(link_service, link_repository, config.base_url.clone());

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves when the process receives Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
