use recipe_search::{ApiConfig, RecipeSearchServer};
use rmcp::transport::sse_server::{SseServer, SseServerConfig};
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".to_string().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let api_config = match ApiConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            tracing::error!("Please verify:");
            tracing::error!("  - EDAMAM_APP_ID is set to your application id");
            tracing::error!("  - EDAMAM_APP_KEY is set to your application key");
            tracing::error!("  - EDAMAM_TIMEOUT_SECS, if set, is a whole number of seconds");
            std::process::exit(1);
        }
    };
    tracing::debug!("Using API configuration: {:?}", api_config);

    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3001".to_string());

    let config = SseServerConfig {
        bind: bind_addr.parse()?,
        sse_path: "/sse".to_string(),
        post_path: "/message".to_string(),
        ct: tokio_util::sync::CancellationToken::new(),
        sse_keep_alive: None,
    };

    tracing::info!("Recipe search server listening on {}", config.bind);

    let sse_server = SseServer::serve_with_config(config).await?;

    // Every session gets its own view and state
    let ct = sse_server.with_service(move || RecipeSearchServer::new(api_config.clone()));

    tracing::info!("Recipe search server started successfully");

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down...");
    ct.cancel();

    Ok(())
}
