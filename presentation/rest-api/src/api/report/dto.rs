use poem_openapi::Multipart;
use poem_openapi::types::multipart::Upload;

use business::domain::report::errors::AnalysisError;
use business::domain::report::model::ReportUpload;

/// Multipart form accepted by the analyze endpoint.
///
/// `file` may be absent or repeated at the parsing level: a missing part
/// reaches the use case and gets the proper validation message, and only the
/// first repeated part is analyzed.
#[derive(Multipart)]
pub struct AnalyzeReportForm {
    /// Health report in PDF format
    pub file: Vec<Upload>,
}

impl AnalyzeReportForm {
    pub fn into_first_file(self) -> Option<Upload> {
        self.file.into_iter().next()
    }
}

/// Buffers an uploaded part in memory.
pub async fn read_upload(file: Upload) -> Result<ReportUpload, AnalysisError> {
    let file_name = file.file_name().map(str::to_string);
    let content = file
        .into_vec()
        .await
        .map_err(|e| AnalysisError::UploadUnreadable(e.to_string()))?;

    Ok(ReportUpload { file_name, content })
}
