use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reel_api::config::Config;
use reel_api::db;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reel_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Reel API...");

    let config = Config::fixed()?;

    tracing::info!("Opening store at {}", config.database_path.display());

    // The listener is only bound once the store is usable
    let pool = db::open_store(&config.database_path)
        .await
        .inspect_err(|err| tracing::error!("{}", err))
        .context("Failed to open the movie store")?;

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;

    tracing::info!("Server Running at http://{}/", listener.local_addr()?);

    reel_api::serve(listener, pool)
        .await
        .context("Server terminated unexpectedly")
}
