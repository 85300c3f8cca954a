use async_trait::async_trait;

use super::errors::GenerationError;
use super::settings::GenerationSettings;

/// Service port for the external generative-language API.
///
/// Returns the model's reply text exactly as produced. When `settings` is
/// `None` the provider defaults apply.
#[async_trait]
pub trait ContentGeneratorService: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        settings: Option<GenerationSettings>,
    ) -> Result<String, GenerationError>;
}
