mod api;
mod config;
mod youtube;

use crate::api::AppState;
use crate::config::AppConfig;
use crate::youtube::YouTubeClient;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::load()?;

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.max_level()?)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("🚀 Starting YouTube proxy server");
    info!("📋 Configuration loaded");
    info!("   - Upstream: {}", config.youtube.base_url);
    info!("   - Server: {}", config.bind_addr());

    // Upstream client is built once and shared read-only by every request
    let youtube = Arc::new(YouTubeClient::from_config(&config.youtube));
    let state = AppState::new(youtube);

    let app = api::router(state).layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🌐 Server listening on http://{}", addr);
    info!("");
    info!("📡 Available endpoints:");
    info!("   GET  /health                     - Health check");
    info!("   GET  /search?search_query=<term> - Search videos");
    info!("   GET  /channels?channel=<term>    - Search channels");
    info!("   GET  /comments?videoId=<id>      - Comment threads of a video");
    info!("");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server shutting down gracefully");

    Ok(())
}

/// Graceful shutdown handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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

    info!("🛑 Shutdown signal received");
}
