use std::sync::Arc;
use anyhow::{Context, Result};
use mock_registry::api;
use mock_registry::config::Config;
use mock_registry::registry::Registry;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing. Per-request access logs are intentionally absent;
    // this runs inside test harnesses and should stay quiet.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("mock_registry=info")),
        )
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;

    let registry = Arc::new(Registry::fixture());
    tracing::info!("Loaded {} service records", registry.all().len());

    let app = api::routes::router(api::routes::AppState { registry });

    let listen = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&listen)
        .await
        .with_context(|| format!("Failed to bind to {listen}"))?;

    tracing::info!("mock-registry listening on {listen}");

    // No shutdown hook; the process is killed by the harness when the test
    // run ends.
    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
