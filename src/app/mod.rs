pub mod error;
pub mod handlers;
pub mod state;
pub mod templates;

pub use state::AppState;

use crate::core::ConfigProvider;
use anyhow::{Context, Result};
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index).post(handlers::submit))
        .route("/usuario/:nombre", get(handlers::greet))
        .route("/about", get(handlers::about))
        .route("/leer_txt", get(handlers::read_txt))
        .route("/leer_json", get(handlers::read_json))
        .route("/leer_csv", get(handlers::read_csv))
        .route("/leer_sqlite", get(handlers::read_sqlite))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 啟動 HTTP 服務，收到 Ctrl-C / SIGTERM 後關閉資料庫連線池
pub async fn run_server<C: ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    let state = AppState::initialize(config)
        .await
        .context("Failed to initialize application state")?;

    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .context("Failed to parse bind address")?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    tracing::info!("🚀 Listening on http://{}", addr);

    let served = axum::serve(listener, build_router(state.clone()))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error");

    state.shutdown().await;
    served
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
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
