use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::model_catalog::errors::CatalogError;
use crate::domain::model_catalog::services::ModelCatalogService;
use crate::domain::model_catalog::use_cases::list::ListGenerationModelsUseCase;

pub struct ListGenerationModelsUseCaseImpl {
    pub catalog: Arc<dyn ModelCatalogService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListGenerationModelsUseCase for ListGenerationModelsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<String>, CatalogError> {
        let models = self.catalog.list_models().await?;
        let total = models.len();

        let names: Vec<String> = models
            .into_iter()
            .filter(|model| model.supports_content_generation())
            .map(|model| model.name)
            .collect();

        self.logger.debug(&format!(
            "{} of {} models support content generation",
            names.len(),
            total
        ));

        Ok(names)
    }
}
