//! Groups API server: loads settings from env, prepares the database, serves `/api/groups`.

use groups_api::{app_router, apply_migrations, ensure_database_exists, AppState, PgGroupStore, Settings};
use std::time::Duration;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("groups_api=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    let db = &settings.database;

    ensure_database_exists(db).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(db.pool_size)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(db.connect_options())
        .await?;
    tracing::info!(host = %db.host, database = %db.name, pool_size = db.pool_size, "connected to database");

    apply_migrations(&pool).await?;

    let state = AppState::new(PgGroupStore::new(pool.clone()));
    let app = app_router(state);

    let listener = TcpListener::bind(settings.listen_addr()).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("server stopped");
    Ok(())
}

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
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
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
    tracing::info!("starting graceful shutdown");
}
