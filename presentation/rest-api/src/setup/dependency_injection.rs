use std::sync::Arc;

use gemini::client::GeminiClient;
use gemini::config::GeminiConfig;
use gemini::content_generator::ContentGeneratorGemini;
use logger::TracingLogger;
use pdf::text_extractor::PdfTextExtractor;

use business::application::report::analyze::AnalyzeReportUseCaseImpl;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub page_api: crate::api::page::routes::PageApi,
    pub report_api: crate::api::report::routes::ReportApi,
}

impl DependencyContainer {
    pub fn new(gemini_config: &GeminiConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();
        let page_api = crate::api::page::routes::PageApi;

        // Infrastructure adapters
        let gemini_client = GeminiClient::new(gemini_config);
        let content_generator = Arc::new(ContentGeneratorGemini::new(gemini_client));
        let text_extractor = Arc::new(PdfTextExtractor::new());

        // Report use cases
        let analyze_use_case = Arc::new(AnalyzeReportUseCaseImpl {
            extractor: text_extractor,
            generator: content_generator,
            logger,
        });

        let report_api = crate::api::report::routes::ReportApi::new(analyze_use_case);

        Self {
            health_api,
            page_api,
            report_api,
        }
    }
}
