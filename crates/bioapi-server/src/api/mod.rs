pub mod response;

use crate::config::Config;
use crate::features::{self, FeatureState};
use crate::middleware::{cors_layer, tracing_layer};
use crate::resolver::ProteinResolver;
use crate::upstream::ReqwestFetch;
use axum::{response::IntoResponse, routing::get, Json, Router};
use serde_json::json;
use std::future::{Future, IntoFuture};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Build the transport and resolver from `config` and serve until `shutdown`
/// resolves.
pub async fn serve<F>(config: Config, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let http = ReqwestFetch::new(&config.upstream)?;
    let resolver = ProteinResolver::new(Arc::new(http), &config.upstream);
    let app = create_router(FeatureState::new(resolver), &config);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    let grace = Duration::from_secs(config.server.shutdown_timeout_secs);
    serve_until(listener, app, shutdown, grace).await
}

/// Serve `app` until `shutdown` resolves. The listener stops accepting at
/// that moment and open connections get at most `grace` to finish before
/// they are dropped.
pub async fn serve_until<F>(
    listener: TcpListener,
    app: Router,
    shutdown: F,
    grace: Duration,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (fired_tx, fired_rx) = oneshot::channel::<()>();
    let signal = async move {
        shutdown.await;
        let _ = fired_tx.send(());
    };

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(signal)
        .into_future();
    tokio::pin!(server);

    tokio::select! {
        result = &mut server => return Ok(result?),
        _ = fired_rx => {}
    }

    tracing::info!("Waiting up to {} seconds for connections to close", grace.as_secs());
    match tokio::time::timeout(grace, server).await {
        Ok(result) => result?,
        Err(_) => tracing::warn!("Shutdown grace period elapsed, dropping open connections"),
    }

    Ok(())
}

pub fn create_router(state: FeatureState, config: &Config) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .nest("/api/v1", features::router(state))
        .layer(cors_layer(&config.cors))
        .layer(tracing_layer())
}

async fn root() -> impl IntoResponse {
    Json(json!({
        "name": "BioAPI Server",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}

async fn health() -> impl IntoResponse {
    Json(json!({ "service": "up" }))
}
