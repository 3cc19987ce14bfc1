//! Entry point for the `boruto-gateway` HTTP server.

use std::sync::Arc;

use boruto_core::Dataset;
use boruto_gateway::{config::GatewayConfig, routes::create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = GatewayConfig::from_env();

    let dataset = match Dataset::builtin() {
        Ok(d) => Arc::new(d),
        Err(e) => {
            tracing::error!(error = %e, "failed to build hero catalog");
            std::process::exit(1);
        }
    };
    info!(
        heroes = dataset.heroes().len(),
        pages = dataset.page_count(),
        "hero catalog loaded"
    );

    let app = create_router(dataset, &config);

    let listener = match tokio::net::TcpListener::bind(&config.listen_addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %config.listen_addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(
        addr = %config.listen_addr,
        images = %config.images_dir.display(),
        "boruto-gateway listening"
    );

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
