use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;

use crate::config::{Config, ConfigError};
use crate::services::student::handlers;
use crate::services::{SharedRegistry, StudentRegistry};

/// 服务器错误类型
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn router(registry: SharedRegistry) -> Router {
    Router::new()
        .route(
            "/students",
            get(handlers::list_students).post(handlers::create_student),
        )
        .route(
            "/students/{id}",
            get(handlers::get_student)
                .put(handlers::update_student)
                .delete(handlers::delete_student),
        )
        .fallback(handlers::route_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(registry)
}

pub async fn start(config: Config) -> Result<(), ServerError> {
    let addr = config.listen_addr()?;
    let listener = TcpListener::bind(addr).await?;

    // 初始化学生注册表
    let registry = StudentRegistry::seeded().into_shared();

    let shutdown = CancellationToken::new();
    tokio::spawn(forward_shutdown_signal(shutdown.clone()));

    serve(listener, registry, shutdown).await
}

/// 在已绑定的监听器上提供服务，直到 `shutdown` 被取消
pub async fn serve(
    listener: TcpListener,
    registry: SharedRegistry,
    shutdown: CancellationToken,
) -> Result<(), ServerError> {
    let local_addr = listener.local_addr()?;
    tracing::info!("Server running at http://{}", local_addr);

    axum::serve(listener, router(registry))
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

// 收到 Ctrl+C 或 SIGTERM 时取消令牌
async fn forward_shutdown_signal(shutdown: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
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
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down gracefully"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down gracefully"),
    }

    shutdown.cancel();
}
