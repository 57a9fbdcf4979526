use anyhow::Context;
use clap::Parser;
use nodeview::{Config, StatusPage, routes};
use nodeview_consul::build_http_client;
use nodeview_core::{PrefixClassifier, SystemInterfaces};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::parse();

    if let Err(e) = run(config).await {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> anyhow::Result<()> {
    config.validate(&SystemInterfaces)?;

    let http = build_http_client(config.consul_timeout())
        .context("Failed to create HTTP client")?;

    let page = StatusPage::new(config.page_config(), http)
        .with_classifier(PrefixClassifier::new(config.web_prefix.as_str()));

    let (addr, server) = warp::serve(routes(page))
        .try_bind_with_graceful_shutdown(config.listen_addr(), shutdown_signal())
        .with_context(|| format!("Failed to listen on port {}", config.port))?;

    info!(
        "Serving on {} (interface {}, datacenter {})",
        addr, config.iface, config.datacenter
    );
    server.await;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutting down"),
        Err(e) => {
            error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await
        }
    }
}
