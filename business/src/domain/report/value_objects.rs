use super::errors::AnalysisError;

const PDF_EXTENSION: &str = ".pdf";

/// A validated report file name: present, non-empty and ending in `.pdf`
/// (case-insensitive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFileName(String);

impl ReportFileName {
    pub fn parse(file_name: Option<&str>) -> Result<Self, AnalysisError> {
        let name = match file_name {
            Some(name) if !name.is_empty() => name,
            _ => return Err(AnalysisError::EmptyFileName),
        };

        if !name.to_lowercase().ends_with(PDF_EXTENSION) {
            return Err(AnalysisError::InvalidFileType);
        }

        Ok(Self(name.to_string()))
    }
}

impl std::fmt::Display for ReportFileName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
