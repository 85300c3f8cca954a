use std::sync::Arc;

use poem::http::StatusCode;
use poem_openapi::{
    OpenApi,
    payload::{Json, PlainText},
};

use business::domain::report::errors::AnalysisError;
use business::domain::report::use_cases::analyze::{AnalyzeReportParams, AnalyzeReportUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::report::dto::{AnalyzeReportForm, read_upload};
use crate::api::tags::ApiTags;

pub struct ReportApi {
    analyze_use_case: Arc<dyn AnalyzeReportUseCase>,
}

impl ReportApi {
    pub fn new(analyze_use_case: Arc<dyn AnalyzeReportUseCase>) -> Self {
        Self { analyze_use_case }
    }
}

/// Health report analysis API
#[OpenApi]
impl ReportApi {
    /// Analyze a health report
    ///
    /// Extracts the text of an uploaded PDF and asks the language model for a
    /// structured analysis: symptoms and their triggers, detected chronic
    /// disease, exercise/meditation/yoga recommendations, medicine notes, a
    /// motivational message and a disclaimer.
    ///
    /// The model's reply is returned exactly as produced. It is requested in
    /// JSON mode but not validated here.
    #[oai(path = "/analyze", method = "post", tag = "ApiTags::Reports")]
    async fn analyze(&self, form: AnalyzeReportForm) -> AnalyzeReportResponse {
        let upload = match form.into_first_file() {
            Some(file) => match read_upload(file).await {
                Ok(upload) => Some(upload),
                Err(err) => return err.into(),
            },
            None => None,
        };

        match self
            .analyze_use_case
            .execute(AnalyzeReportParams { upload })
            .await
        {
            Ok(report) => AnalyzeReportResponse::Ok(PlainText(report.content)),
            Err(err) => err.into(),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
#[oai(bad_request_handler = "unreadable_form")]
pub enum AnalyzeReportResponse {
    /// Raw model output, expected to be JSON
    #[oai(status = 200, content_type = "application/json")]
    Ok(PlainText<String>),
    /// Missing file, empty file name or non-PDF upload
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    /// Extraction or generation failure
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

/// Bodies that are not a readable multipart form carry no file part.
fn unreadable_form(err: poem::Error) -> AnalyzeReportResponse {
    tracing::debug!("Rejected analyze request body: {}", err);
    AnalysisError::MissingFile.into()
}

impl From<AnalysisError> for AnalyzeReportResponse {
    fn from(err: AnalysisError) -> Self {
        let (status, json) = err.into_error_response();
        if status == StatusCode::BAD_REQUEST {
            AnalyzeReportResponse::BadRequest(json)
        } else {
            AnalyzeReportResponse::InternalError(json)
        }
    }
}
