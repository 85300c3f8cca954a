/// A file received from the caller, held in memory for the request's duration.
#[derive(Debug, Clone)]
pub struct ReportUpload {
    pub file_name: Option<String>,
    pub content: Vec<u8>,
}

/// Text pulled out of a report, pages joined in order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractedText(String);

impl ExtractedText {
    /// Concatenates page texts in order with no separator.
    pub fn from_pages<I>(pages: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self(pages.into_iter().collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The model's reply, forwarded to the caller without parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    pub content: String,
}
