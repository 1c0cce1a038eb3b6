use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use roombook::api::{self, AppState};
use roombook::engine::Engine;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let metrics_port: Option<u16> = std::env::var("ROOMBOOK_METRICS_PORT")
        .ok()
        .and_then(|s| s.parse().ok());
    roombook::observability::init(metrics_port)?;

    let port = std::env::var("ROOMBOOK_PORT").unwrap_or_else(|_| "3000".into());
    let bind = std::env::var("ROOMBOOK_BIND").unwrap_or_else(|_| "0.0.0.0".into());

    let engine = Arc::new(Engine::new());
    let app = api::router(AppState::new(engine));

    let addr = format!("{bind}:{port}");
    let listener = TcpListener::bind(&addr).await?;
    info!("roombook listening on http://{addr}");
    info!("  metrics: {}", metrics_port.map_or("disabled".to_string(), |p| format!("http://0.0.0.0:{p}/metrics")));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("roombook stopped");
    Ok(())
}

/// Resolves on ctrl-c or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {e}");
        }
    };

    #[cfg(unix)]
    {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = ctrl_c => {}
                    _ = sigterm.recv() => {}
                }
            }
            Err(e) => {
                tracing::error!("failed to register SIGTERM handler: {e}");
                ctrl_c.await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        ctrl_c.await;
    }

    info!("shutdown signal received, draining connections");
}
