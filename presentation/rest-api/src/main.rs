mod api;
mod config;
mod setup;

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// Initializes the application, wires dependencies, and starts the HTTP server.
///
/// Layout follows the hexagonal split used across the workspace:
/// - config/: Application configuration (server, CORS, Gemini)
/// - setup/: Dependency injection and server setup
/// - api/: Route handlers, multipart forms and error mapping
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables from the API key file and ./.env
    gemini::config::load_env_files();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config.gemini);

    // 5. Run server
    Server::run(config, container).await?;

    Ok(())
}
