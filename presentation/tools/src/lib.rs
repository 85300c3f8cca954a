//! Shared startup for the Gemini command-line utilities.

use std::path::Path;

use gemini::client::GeminiClient;
use gemini::config::{GeminiConfig, load_env_files};

/// File the connectivity check writes its failure into.
pub const ERROR_LOG_PATH: &str = "error_log.txt";

/// Installs a tracing subscriber on stderr so stdout only carries results.
pub fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the API key file and builds a client from the environment.
pub fn gemini_client() -> GeminiClient {
    load_env_files();
    GeminiClient::new(&GeminiConfig::from_env())
}

/// Replaces the contents of `path` with `message`.
pub async fn write_error_log(path: &Path, message: &str) -> std::io::Result<()> {
    tokio::fs::write(path, message).await
}
