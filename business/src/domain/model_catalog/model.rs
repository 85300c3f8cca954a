/// Capability name a model must advertise to be usable for text generation.
pub const CONTENT_GENERATION_METHOD: &str = "generateContent";

/// A model entry as listed by the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelInfo {
    /// Fully qualified identifier, e.g. `models/gemini-2.0-flash`.
    pub name: String,
    pub supported_generation_methods: Vec<String>,
}

impl ModelInfo {
    pub fn supports_content_generation(&self) -> bool {
        self.supported_generation_methods
            .iter()
            .any(|method| method == CONTENT_GENERATION_METHOD)
    }
}
