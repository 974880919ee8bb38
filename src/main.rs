use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tickbox::router::init_router;
use tickbox::state::AppState;
use tickbox_config::{AuthConfig, ServerConfig};
use tickbox_db::{PgUserStore, database_url_from_env, init_db_pool, run_migrations};
use tickbox_observability::init_tracing;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let auth_config = AuthConfig::from_env().context("invalid session configuration")?;
    let server_config = ServerConfig::from_env();

    let database_url = database_url_from_env().context("DATABASE_URL must be set")?;
    let pool = init_db_pool(&database_url)
        .await
        .context("failed to connect to database")?;
    run_migrations(&pool)
        .await
        .context("failed to run migrations")?;

    let state = AppState::new(&auth_config, Arc::new(PgUserStore::new(pool)))
        .map_err(|e| e.error.context("failed to initialise application state"))?;
    let app = init_router(state);

    let addr = server_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
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

    info!("shutdown signal received");
}
