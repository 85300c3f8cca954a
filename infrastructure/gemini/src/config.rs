use std::env;
use std::path::Path;

/// Dotenv file holding the API key, relative to the working directory.
pub const ENV_FILE_PATH: &str = "file analysis/.env";

const DEFAULT_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Configuration for Gemini API access.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl GeminiConfig {
    /// Load Gemini configuration from environment variables
    ///
    /// Environment variables:
    /// - GEMINI_API_KEY: API key (a warning is logged when missing, startup continues)
    /// - GEMINI_MODEL: Model identifier (default: "gemini-2.0-flash")
    /// - GEMINI_BASE_URL: REST endpoint root (default: public v1beta endpoint)
    /// - GEMINI_TIMEOUT_SECS: HTTP request timeout (default: 120)
    pub fn from_env() -> Self {
        let config = Self::from_vars(|name| env::var(name).ok());
        if !config.has_api_key() {
            tracing::warn!("GEMINI_API_KEY not found in environment variables.");
        }
        config
    }

    fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GEMINI_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .unwrap_or_default();

        let model = lookup("GEMINI_MODEL")
            .filter(|model| !model.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let base_url = lookup("GEMINI_BASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_secs = lookup("GEMINI_TIMEOUT_SECS")
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            api_key,
            model,
            base_url,
            timeout_secs,
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

/// Loads the API key file, then a `.env` in the working directory.
///
/// Both files are optional and never override variables already set.
pub fn load_env_files() {
    if let Err(err) = dotenvy::from_path(Path::new(ENV_FILE_PATH)) {
        tracing::debug!("Skipping {}: {}", ENV_FILE_PATH, err);
    }
    dotenvy::dotenv().ok();
}
