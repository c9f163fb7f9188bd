use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes::{self, auth::ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Router over an already-migrated database.
pub fn build_app(db: DatabaseConnection, cfg: &AppConfig) -> Router {
    let state = ServerState::new(db, &cfg.auth);
    routes::build_router(build_cors(), state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; shutdown only by killing the process");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, draining connections");
}

/// Connect, migrate, bind and serve until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    if cfg.auth.session_secret == configs::DEV_SESSION_SECRET {
        warn!("using the development session secret; set SESSION_SECRET in production");
    }

    common::env::ensure_sqlite_parent(&cfg.database.url).await?;
    let db = models::db::connect_and_migrate(&cfg.database).await?;

    let app = build_app(db, &cfg);

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    info!("server stopped");
    Ok(())
}
