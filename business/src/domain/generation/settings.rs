/// Sampling configuration sent along with a generation request.
///
/// Values are opaque to this service and forwarded to the provider untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    pub max_output_tokens: u32,
    pub response_mime_type: String,
}

impl GenerationSettings {
    /// Settings used for health report analysis: JSON output mode with
    /// the provider's recommended sampling values.
    pub fn json_analysis() -> Self {
        Self {
            temperature: 1.0,
            top_p: 0.95,
            top_k: 64,
            max_output_tokens: 8192,
            response_mime_type: "application/json".to_string(),
        }
    }
}
