//! BioAPI Server - Main entry point

use anyhow::Result;
use bioapi_common::logging::{init_logging, LogConfig};
use tokio::signal;
use tracing::info;

use bioapi_server::{api, config::Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Environment variables take precedence over these defaults
    let log_config = LogConfig::builder()
        .log_file_prefix("bioapi-server")
        .filter_directives("bioapi_server=debug,tower_http=debug,reqwest=info")
        .build()
        .merge_env()?;

    let _guard = init_logging(&log_config)?;

    info!("Starting BioAPI Server");

    let config = Config::load()?;
    info!(
        "Configuration loaded - server will bind to {}:{}",
        config.server.host, config.server.port
    );
    info!(
        pdb = %config.upstream.pdb_base_url,
        uniprot = %config.upstream.uniprot_base_url,
        timeout_secs = config.upstream.timeout_secs,
        "Upstream endpoints"
    );

    api::serve(config, shutdown_signal()).await?;

    info!("Server shut down gracefully");

    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM. The drain deadline is enforced by
/// [`api::serve_until`].
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received terminate signal, starting graceful shutdown");
        },
    }
}
