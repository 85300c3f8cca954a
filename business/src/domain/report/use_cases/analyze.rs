use async_trait::async_trait;

use crate::domain::report::errors::AnalysisError;
use crate::domain::report::model::{AnalysisReport, ReportUpload};

pub struct AnalyzeReportParams {
    /// `None` when the request carried no file part.
    pub upload: Option<ReportUpload>,
}

#[async_trait]
pub trait AnalyzeReportUseCase: Send + Sync {
    async fn execute(&self, params: AnalyzeReportParams) -> Result<AnalysisReport, AnalysisError>;
}
