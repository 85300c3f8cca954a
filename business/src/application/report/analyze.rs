use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::generation::services::ContentGeneratorService;
use crate::domain::generation::settings::GenerationSettings;
use crate::domain::logger::Logger;
use crate::domain::report::errors::AnalysisError;
use crate::domain::report::model::{AnalysisReport, ExtractedText};
use crate::domain::report::prompt::build_analysis_prompt;
use crate::domain::report::services::TextExtractorService;
use crate::domain::report::use_cases::analyze::{AnalyzeReportParams, AnalyzeReportUseCase};
use crate::domain::report::value_objects::ReportFileName;

pub struct AnalyzeReportUseCaseImpl {
    pub extractor: Arc<dyn TextExtractorService>,
    pub generator: Arc<dyn ContentGeneratorService>,
    pub logger: Arc<dyn Logger>,
}

impl AnalyzeReportUseCaseImpl {
    async fn analyze(&self, document: Vec<u8>) -> Result<AnalysisReport, AnalysisError> {
        let pages = self.extractor.extract_pages(document).await?;
        let page_count = pages.len();
        let text = ExtractedText::from_pages(pages);

        self.logger.debug(&format!(
            "Extracted {} characters from {} pages",
            text.len(),
            page_count
        ));

        let prompt = build_analysis_prompt(text.as_str());
        let content = self
            .generator
            .generate(&prompt, Some(GenerationSettings::json_analysis()))
            .await?;

        Ok(AnalysisReport { content })
    }
}

#[async_trait]
impl AnalyzeReportUseCase for AnalyzeReportUseCaseImpl {
    async fn execute(&self, params: AnalyzeReportParams) -> Result<AnalysisReport, AnalysisError> {
        let upload = params.upload.ok_or(AnalysisError::MissingFile)?;
        let file_name = ReportFileName::parse(upload.file_name.as_deref())?;

        self.logger.info(&format!(
            "Analyzing health report {} ({} bytes)",
            file_name,
            upload.content.len()
        ));

        let result = self.analyze(upload.content).await;

        match &result {
            Ok(report) => self.logger.info(&format!(
                "Report {} analyzed: {} characters returned",
                file_name,
                report.content.len()
            )),
            Err(err) => self
                .logger
                .error(&format!("Failed to analyze report {}: {}", file_name, err)),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::generation::errors::GenerationError;
    use crate::domain::report::model::ReportUpload;
    use mockall::mock;

    mock! {
        pub Extractor {}

        #[async_trait]
        impl TextExtractorService for Extractor {
            async fn extract_pages(&self, document: Vec<u8>) -> Result<Vec<String>, AnalysisError>;
        }
    }

    mock! {
        pub Generator {}

        #[async_trait]
        impl ContentGeneratorService for Generator {
            async fn generate(
                &self,
                prompt: &str,
                settings: Option<GenerationSettings>,
            ) -> Result<String, GenerationError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn pdf_upload(file_name: &str) -> Option<ReportUpload> {
        Some(ReportUpload {
            file_name: Some(file_name.to_string()),
            content: b"%PDF-1.5 fake".to_vec(),
        })
    }

    fn untouched_use_case() -> AnalyzeReportUseCaseImpl {
        let mut extractor = MockExtractor::new();
        extractor.expect_extract_pages().never();
        let mut generator = MockGenerator::new();
        generator.expect_generate().never();

        AnalyzeReportUseCaseImpl {
            extractor: Arc::new(extractor),
            generator: Arc::new(generator),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_return_model_output_verbatim() {
        let mut extractor = MockExtractor::new();
        extractor
            .expect_extract_pages()
            .returning(|_| Ok(vec!["Patient reports headache.".to_string()]));

        let mut generator = MockGenerator::new();
        generator
            .expect_generate()
            .withf(|prompt, settings| {
                prompt.contains("Patient reports headache.")
                    && settings.as_ref() == Some(&GenerationSettings::json_analysis())
            })
            .returning(|_, _| Ok(r#"{"symptoms":[ ]} "#.to_string()));

        let use_case = AnalyzeReportUseCaseImpl {
            extractor: Arc::new(extractor),
            generator: Arc::new(generator),
            logger: mock_logger(),
        };

        let report = use_case
            .execute(AnalyzeReportParams {
                upload: pdf_upload("report.PDF"),
            })
            .await
            .unwrap();

        assert_eq!(report.content, r#"{"symptoms":[ ]} "#);
    }

    #[tokio::test]
    async fn should_pass_non_json_output_through_unchanged() {
        let mut extractor = MockExtractor::new();
        extractor
            .expect_extract_pages()
            .returning(|_| Ok(vec!["text".to_string()]));
        let mut generator = MockGenerator::new();
        generator
            .expect_generate()
            .returning(|_, _| Ok("not json at all {".to_string()));

        let use_case = AnalyzeReportUseCaseImpl {
            extractor: Arc::new(extractor),
            generator: Arc::new(generator),
            logger: mock_logger(),
        };

        let report = use_case
            .execute(AnalyzeReportParams {
                upload: pdf_upload("report.pdf"),
            })
            .await
            .unwrap();

        assert_eq!(report.content, "not json at all {");
    }

    #[tokio::test]
    async fn should_embed_pages_joined_without_separator() {
        let mut extractor = MockExtractor::new();
        extractor
            .expect_extract_pages()
            .returning(|_| Ok(vec!["Hemoglobin 13.".to_string(), "2 g/dL".to_string()]));
        let mut generator = MockGenerator::new();
        generator
            .expect_generate()
            .withf(|prompt, _| prompt.contains("Hemoglobin 13.2 g/dL"))
            .times(1)
            .returning(|_, _| Ok("{}".to_string()));

        let use_case = AnalyzeReportUseCaseImpl {
            extractor: Arc::new(extractor),
            generator: Arc::new(generator),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AnalyzeReportParams {
                upload: pdf_upload("labs.pdf"),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_fail_with_missing_file_when_no_upload() {
        let result = untouched_use_case()
            .execute(AnalyzeReportParams { upload: None })
            .await;

        assert!(matches!(result.unwrap_err(), AnalysisError::MissingFile));
    }

    #[tokio::test]
    async fn should_fail_with_empty_file_name_before_processing() {
        let result = untouched_use_case()
            .execute(AnalyzeReportParams {
                upload: Some(ReportUpload {
                    file_name: Some(String::new()),
                    content: vec![1, 2, 3],
                }),
            })
            .await;

        assert!(matches!(result.unwrap_err(), AnalysisError::EmptyFileName));
    }

    #[tokio::test]
    async fn should_fail_with_invalid_type_for_non_pdf() {
        let result = untouched_use_case()
            .execute(AnalyzeReportParams {
                upload: pdf_upload("scan.png"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), AnalysisError::InvalidFileType));
    }

    #[tokio::test]
    async fn should_not_call_model_when_extraction_fails() {
        let mut extractor = MockExtractor::new();
        extractor
            .expect_extract_pages()
            .returning(|_| Err(AnalysisError::Extraction("invalid file header".to_string())));
        let mut generator = MockGenerator::new();
        generator.expect_generate().never();

        let use_case = AnalyzeReportUseCaseImpl {
            extractor: Arc::new(extractor),
            generator: Arc::new(generator),
            logger: mock_logger(),
        };

        let err = use_case
            .execute(AnalyzeReportParams {
                upload: pdf_upload("report.pdf"),
            })
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "invalid file header");
    }

    #[tokio::test]
    async fn should_surface_generation_error_message() {
        let mut extractor = MockExtractor::new();
        extractor
            .expect_extract_pages()
            .returning(|_| Ok(vec!["text".to_string()]));
        let mut generator = MockGenerator::new();
        generator.expect_generate().returning(|_, _| {
            Err(GenerationError::Api {
                status: 429,
                message: "Resource has been exhausted".to_string(),
            })
        });

        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        logger
            .expect_error()
            .withf(|message| message.contains("Resource has been exhausted"))
            .times(1)
            .returning(|_| ());

        let use_case = AnalyzeReportUseCaseImpl {
            extractor: Arc::new(extractor),
            generator: Arc::new(generator),
            logger: Arc::new(logger),
        };

        let err = use_case
            .execute(AnalyzeReportParams {
                upload: pdf_upload("report.pdf"),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AnalysisError::Generation(_)));
        assert_eq!(
            err.to_string(),
            "Generation API returned 429: Resource has been exhausted"
        );
    }
}
