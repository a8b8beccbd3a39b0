use quantlens::config::Config;
use quantlens::services::SECTOR_ETFS;
use quantlens::{app, AppState};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quantlens=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let addr = config.bind_address();
    info!(
        "Starting QuantLens on {} (sector scan cache {}s, {} sectors)",
        addr,
        config.scan_cache_ttl.as_secs(),
        SECTOR_ETFS.len()
    );

    let state = AppState::new(config);
    let app = app(state);

    // Start the server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("QuantLens listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
