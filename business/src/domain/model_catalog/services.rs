use async_trait::async_trait;

use super::errors::CatalogError;
use super::model::ModelInfo;

/// Service port for enumerating the provider's model catalog.
///
/// Implementations return the complete catalog, following pagination.
#[async_trait]
pub trait ModelCatalogService: Send + Sync {
    async fn list_models(&self) -> Result<Vec<ModelInfo>, CatalogError>;
}
