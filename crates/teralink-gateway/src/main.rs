use clap::Parser;
use teralink_core::ResolveService;
use teralink_gateway::cli::CLI;
use teralink_gateway::{App, AppState};
use teralink_upstream::HttpUpstreamClient;
use tracing::info;

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!(%error, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::error!(%error, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received Ctrl+C, shutting down"),
        _ = terminate => info!("received SIGTERM, shutting down"),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // a missing .env file is fine; real environment variables still apply
    dotenv::dotenv().ok();
    let config = CLI::try_parse()?;

    teralink_telemetry::init(config.log_format)?;

    info!(
        listen_addr = %config.bind_addr(),
        upstream = %config.upstream_base_url,
        upstream_timeout_ms = config.upstream_timeout_ms,
        allowed_domains = ?config.allowed_domains,
        static_dir = %config.static_dir.display(),
        "starting gateway server"
    );

    let client = HttpUpstreamClient::new(config.upstream_config())?;
    let service = ResolveService::new(client).with_gate(config.provider_gate());
    let router = App::router(AppState::new(service), config.static_dir.clone());

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!(listen_addr = %listener.local_addr()?, "gateway server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
