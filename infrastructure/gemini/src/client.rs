use std::time::Duration;

use reqwest::Client;

use crate::config::GeminiConfig;

/// Header carrying the API key on every Gemini request.
pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// Shared Gemini HTTP client configuration.
///
/// Cloning is cheap: the underlying `reqwest::Client` is reference counted.
#[derive(Clone)]
pub struct GeminiClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.trim_start_matches("models/").to_string(),
        }
    }

    /// Returns the generateContent endpoint URL for the configured model.
    pub fn generate_content_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// Returns the model catalog endpoint URL.
    pub fn models_url(&self) -> String {
        format!("{}/models", self.base_url)
    }
}

/// Pulls `error.message` out of a Gemini error body, falling back to the raw body.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str, model: &str) -> GeminiConfig {
        GeminiConfig {
            api_key: "key".to_string(),
            model: model.to_string(),
            base_url: base_url.to_string(),
            timeout_secs: 5,
        }
    }

    #[test]
    fn should_build_generate_content_url() {
        let client = GeminiClient::new(&config(
            "https://generativelanguage.googleapis.com/v1beta/",
            "gemini-2.0-flash",
        ));

        assert_eq!(
            client.generate_content_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
        );
        assert_eq!(
            client.models_url(),
            "https://generativelanguage.googleapis.com/v1beta/models"
        );
    }

    #[test]
    fn should_accept_fully_qualified_model_name() {
        let client = GeminiClient::new(&config("http://localhost", "models/gemini-1.5-pro"));
        assert_eq!(
            client.generate_content_url(),
            "http://localhost/models/gemini-1.5-pro:generateContent"
        );
    }

    #[test]
    fn should_extract_provider_error_message() {
        let body = r#"{"error":{"code":400,"message":"API key not valid. Please pass a valid API key.","status":"INVALID_ARGUMENT"}}"#;
        assert_eq!(
            error_message(body),
            "API key not valid. Please pass a valid API key."
        );
    }

    #[test]
    fn should_fall_back_to_raw_body() {
        assert_eq!(error_message("upstream timeout\n"), "upstream timeout");
    }
}
