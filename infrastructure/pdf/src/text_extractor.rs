use async_trait::async_trait;

use business::domain::report::errors::AnalysisError;
use business::domain::report::services::TextExtractorService;

/// Extracts page text with `pdf-extract`.
///
/// Parsing is CPU bound and may panic on malformed input, so it runs on the
/// blocking pool and a panic is reported as an extraction error.
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PdfTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextExtractorService for PdfTextExtractor {
    async fn extract_pages(&self, document: Vec<u8>) -> Result<Vec<String>, AnalysisError> {
        tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem_by_pages(&document))
            .await
            .map_err(|e| AnalysisError::Extraction(format!("PDF parser crashed: {}", e)))?
            .map_err(|e| AnalysisError::Extraction(e.to_string()))
    }
}
