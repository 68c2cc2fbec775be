mod config;
mod routes;

use anyhow::Result;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = config::Config::from_env()?;

    info!(bind = %config.bind_addr, "Starting feedecay-viz");

    let app = routes::router();

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("Visualizer listening on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
