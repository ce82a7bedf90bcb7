use badge_service::{build_router, config::Config, state::AppState, BADGE_ROUTE};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::load()?;

    // Initialize tracing
    init_tracing(config.logging.json);
    tracing::info!("Starting badge service...");
    tracing::info!("Configuration loaded");

    // Template and asset provider are fixed for the process lifetime
    let app_state = AppState::from_config(config.clone())?;
    tracing::info!(
        "Badge generator ready (assets: {}, cache: {})",
        config.assets.dir.display(),
        config.assets.cache
    );

    let app = build_router(app_state);

    // Start server
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Badge service listening on {}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  - POST {}", BADGE_ROUTE);
    tracing::info!("  - GET  /health");

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,badge_service=debug,tower_http=debug".into());

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
