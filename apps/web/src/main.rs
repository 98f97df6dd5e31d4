use anyhow::Result;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use hoikushi_resume::build_app;
use hoikushi_resume::config::{Config, RunMode};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on a malformed PORT)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Hoikushi Resume v{}", env!("CARGO_PKG_VERSION"));

    if config.font_path.exists() {
        info!("Display font: {}", config.font_path.display());
    } else {
        info!(
            "Display font {} not found; PDFs will use Helvetica",
            config.font_path.display()
        );
    }
    info!("Static assets: {}", config.public_dir.display());

    if config.run_mode == RunMode::Hosted {
        info!("Hosted deployment detected; not binding a port (mount build_app from the platform adapter)");
        return Ok(());
    }

    let port = config.port;
    let app = build_app(config);

    let addr: SocketAddr = format!("0.0.0.0:{port}").parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server started on http://localhost:{port}");

    axum::serve(listener, app).await?;

    Ok(())
}
