use mcp_mealdb::client::{config::DEFAULT_BASE_URL, ClientConfig, RecipeClient};
use mcp_mealdb::server::MealDbMcpServer;
use rmcp::transport::sse_server::{SseServer, SseServerConfig};
use std::env;
use std::time::Duration;
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

    // Get configuration from environment variables
    let base_url =
        env::var("MEALDB_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3001".to_string());

    let mut client_config = ClientConfig::new(base_url.clone());
    if let Ok(secs) = env::var("MEALDB_TIMEOUT_SECS") {
        let secs: u64 = secs
            .parse()
            .map_err(|e| anyhow::anyhow!("MEALDB_TIMEOUT_SECS must be a whole number of seconds: {}", e))?;
        client_config = client_config.with_timeout(Duration::from_secs(secs));
    }

    // Make sure the API answers before we start serving
    tracing::info!("Testing API access at {}...", base_url);
    let test_server = MealDbMcpServer::new(RecipeClient::with_config(client_config.clone()));
    if let Err(e) = test_server.test_api_access().await {
        tracing::warn!("API access test failed: {}", e);
        tracing::warn!("Please verify:");
        tracing::warn!("  - MEALDB_BASE_URL is correct: {}", base_url);
        tracing::warn!("  - The API is reachable from this machine");
        tracing::warn!("The server will continue; tool calls will report errors until the API responds.");
    } else {
        tracing::info!("API access test passed");
    }

    // Create server configuration and start SSE server
    let config = SseServerConfig {
        bind: bind_addr.parse()?,
        sse_path: "/sse".to_string(),
        post_path: "/message".to_string(),
        ct: tokio_util::sync::CancellationToken::new(),
        sse_keep_alive: None,
    };

    tracing::info!("MealDB MCP Server listening on {}", config.bind);

    // serve_with_config handles binding, axum server setup, and graceful shutdown internally
    let sse_server = SseServer::serve_with_config(config).await?;

    let ct = sse_server.with_service(move || {
        MealDbMcpServer::new(RecipeClient::with_config(client_config.clone()))
    });

    tracing::info!("MealDB MCP Server started successfully");

    // Wait for Ctrl+C
    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down...");
    ct.cancel();

    Ok(())
}
