use async_trait::async_trait;

use crate::domain::generation::errors::GenerationError;

/// Fixed prompt used to verify the API key and model are reachable.
pub const PING_PROMPT: &str = "Hello";

#[async_trait]
pub trait CheckConnectivityUseCase: Send + Sync {
    /// Sends the ping prompt and returns the model's reply text.
    async fn execute(&self) -> Result<String, GenerationError>;
}
