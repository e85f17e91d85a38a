//! # foxhend — foxhen-core daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration once (config file, `.env`, env vars)
//! - Initialise `tracing` with the configured filter
//! - Seed the in-memory target registry
//! - Construct the application service and the axum router
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;

use foxhen_adapter_http_axum::router;
use foxhen_adapter_http_axum::state::AppState;
use foxhen_adapter_memory::InMemoryTargetRepository;
use foxhen_app::services::target_service::TargetService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(config.log_filter())?)
        .init();

    // Registry
    let repo = InMemoryTargetRepository::from_targets(config.seed_targets()?)?;
    tracing::info!(mode = %config.mode, targets = repo.len(), "target registry seeded");

    // HTTP
    let http_config = config.http_config();
    let state = AppState::new(TargetService::new(repo), &http_config);
    let app = router::build(state, &http_config);

    let bind_addr = config.bind_addr();
    let listener = match tokio::net::TcpListener::bind(&bind_addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(%bind_addr, error = %err, "failed to bind listener");
            return Err(err.into());
        }
    };
    tracing::info!(
        "foxhend listening on http://{bind_addr}{}",
        http_config.normalized_prefix()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("foxhend stopped");
    Ok(())
}

/// Resolve on SIGINT or, on unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "cannot listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received, draining connections");
}
