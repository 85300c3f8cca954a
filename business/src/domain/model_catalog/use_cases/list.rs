use async_trait::async_trait;

use crate::domain::model_catalog::errors::CatalogError;

#[async_trait]
pub trait ListGenerationModelsUseCase: Send + Sync {
    /// Identifiers of every model that supports content generation.
    async fn execute(&self) -> Result<Vec<String>, CatalogError>;
}
