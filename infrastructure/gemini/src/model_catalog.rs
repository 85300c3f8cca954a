use async_trait::async_trait;
use serde::Deserialize;

use business::domain::model_catalog::errors::CatalogError;
use business::domain::model_catalog::model::ModelInfo;
use business::domain::model_catalog::services::ModelCatalogService;

use crate::client::{API_KEY_HEADER, GeminiClient, error_message};

const PAGE_SIZE: &str = "1000";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListModelsPage {
    #[serde(default)]
    models: Vec<ModelEntry>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModelEntry {
    name: String,
    #[serde(default)]
    supported_generation_methods: Vec<String>,
}

impl From<ModelEntry> for ModelInfo {
    fn from(entry: ModelEntry) -> Self {
        Self {
            name: entry.name,
            supported_generation_methods: entry.supported_generation_methods,
        }
    }
}

pub struct ModelCatalogGemini {
    client: GeminiClient,
}

impl ModelCatalogGemini {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    async fn fetch_page(&self, page_token: Option<&str>) -> Result<ListModelsPage, CatalogError> {
        let mut request = self
            .client
            .client
            .get(self.client.models_url())
            .header(API_KEY_HEADER, &self.client.api_key)
            .query(&[("pageSize", PAGE_SIZE)]);

        if let Some(token) = page_token {
            request = request.query(&[("pageToken", token)]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| CatalogError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message: error_message(&raw),
            });
        }

        response
            .json()
            .await
            .map_err(|e| CatalogError::Request(e.to_string()))
    }
}

#[async_trait]
impl ModelCatalogService for ModelCatalogGemini {
    async fn list_models(&self) -> Result<Vec<ModelInfo>, CatalogError> {
        let mut models = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let page = self.fetch_page(page_token.as_deref()).await?;
            models.extend(page.models.into_iter().map(ModelInfo::from));

            // A repeated token would request the same page forever.
            match page.next_page_token.filter(|token| !token.is_empty()) {
                Some(token) if page_token.as_deref() != Some(token.as_str()) => {
                    page_token = Some(token)
                }
                _ => break,
            }
        }

        Ok(models)
    }
}
