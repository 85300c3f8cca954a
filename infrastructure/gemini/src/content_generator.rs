use async_trait::async_trait;
use serde_json::{Value, json};

use business::domain::generation::errors::GenerationError;
use business::domain::generation::services::ContentGeneratorService;
use business::domain::generation::settings::GenerationSettings;

use crate::client::{API_KEY_HEADER, GeminiClient, error_message};

pub struct ContentGeneratorGemini {
    client: GeminiClient,
}

impl ContentGeneratorGemini {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    fn build_body(prompt: &str, settings: Option<&GenerationSettings>) -> Value {
        let mut body = json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [{"text": prompt}],
                },
            ],
        });

        if let Some(settings) = settings {
            body["generationConfig"] = json!({
                "temperature": settings.temperature,
                "topP": settings.top_p,
                "topK": settings.top_k,
                "maxOutputTokens": settings.max_output_tokens,
                "responseMimeType": settings.response_mime_type,
            });
        }

        body
    }

    /// Joins the text parts of the first candidate.
    fn extract_text(data: &Value) -> Result<String, GenerationError> {
        let parts = data["candidates"]
            .as_array()
            .and_then(|candidates| candidates.first())
            .and_then(|candidate| candidate["content"]["parts"].as_array())
            .ok_or(GenerationError::EmptyResponse)?;

        let texts: Vec<&str> = parts.iter().filter_map(|p| p["text"].as_str()).collect();
        if texts.is_empty() {
            return Err(GenerationError::EmptyResponse);
        }

        Ok(texts.concat())
    }
}

#[async_trait]
impl ContentGeneratorService for ContentGeneratorGemini {
    async fn generate(
        &self,
        prompt: &str,
        settings: Option<GenerationSettings>,
    ) -> Result<String, GenerationError> {
        let body = Self::build_body(prompt, settings.as_ref());

        let response = self
            .client
            .client
            .post(self.client.generate_content_url())
            .header("Content-Type", "application/json")
            .header(API_KEY_HEADER, &self.client.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message: error_message(&raw),
            });
        }

        let data: Value = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;

        Self::extract_text(&data)
    }
}
