use async_trait::async_trait;

use super::errors::AnalysisError;

/// Service port for reading text out of a PDF document.
///
/// Returns one entry per page, in page order.
#[async_trait]
pub trait TextExtractorService: Send + Sync {
    async fn extract_pages(&self, document: Vec<u8>) -> Result<Vec<String>, AnalysisError>;
}
