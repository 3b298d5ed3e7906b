use std::sync::Arc;
use std::time::Duration;

use anyhow::Context as _;
use sea_orm::{ConnectOptions, Database};
use sea_orm_migration::MigratorTrait;
use tracing::{info, warn};

use apis::config::ApisConfig;
use apis::router::build_router;
use apis::state::AppState;
use apis_core::config::Config as _;
use apis_core::tracing::init_tracing;
use apis_migration::Migrator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = ApisConfig::from_env().context("load configuration")?;

    let mut options = ConnectOptions::new(config.database_url.as_str());
    options
        .max_connections(config.database_max_connections)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);
    let db = Database::connect(options)
        .await
        .context("connect to database")?;

    Migrator::up(&db, None).await.context("run migrations")?;
    info!("migrations applied");

    let db = Arc::new(db);
    let state = AppState {
        db: Arc::clone(&db),
    };
    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.apis_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {addr}"))?;

    info!("apis listening on {addr}");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    // In-flight handler tasks may still hold a clone of the pool.
    match Arc::try_unwrap(db) {
        Ok(db) => db.close().await.context("close database pool")?,
        Err(_) => warn!("database pool still shared at shutdown"),
    }
    info!("apis stopped");
    Ok(())
}

/// Resolves on Ctrl-C or, on unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
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
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    info!("received shutdown signal");
}
