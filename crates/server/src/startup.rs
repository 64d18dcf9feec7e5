use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::Router;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use configs::AppConfig;
use service::address::repository::SeaOrmAddressRepository;
use service::prompt::repository::SeaOrmPromptRepository;

use crate::routes::{self, auth::AdminAuth};
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    let cfg = AppConfig::load().context("load configuration")?;

    let db = models::db::connect_with_config(&cfg.database)
        .await
        .context("connect database")?;

    let auth = AdminAuth::new(cfg.auth.admin_token.clone());
    if !auth.verifies_token() {
        warn!("ADMIN_TOKEN is not set; any bearer token will be accepted on admin routes");
    }

    let state = ServerState::new(
        Arc::new(SeaOrmAddressRepository { db: db.clone() }),
        Arc::new(SeaOrmPromptRepository { db }),
        auth,
    );
    let app: Router = routes::build_router(state, build_cors());

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .context("invalid bind address")?;
    info!(%addr, "starting admin server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("admin server stopped");
    Ok(())
}

/// Resolves on Ctrl+C. In-flight requests are allowed to finish; dropping a
/// request future cancels its pending storage call.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}
