use crate::domain::generation::errors::GenerationError;

/// Errors raised while analyzing an uploaded health report.
///
/// Validation variants carry the user-facing message; processing variants
/// render the underlying failure unchanged.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("No file part")]
    MissingFile,
    #[error("No selected file")]
    EmptyFileName,
    #[error("Invalid file type. Please upload a PDF.")]
    InvalidFileType,
    #[error("{0}")]
    UploadUnreadable(String),
    #[error("{0}")]
    Extraction(String),
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl AnalysisError {
    /// True for errors caused by the caller's input rather than by processing.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AnalysisError::MissingFile
                | AnalysisError::EmptyFileName
                | AnalysisError::InvalidFileType
        )
    }
}
