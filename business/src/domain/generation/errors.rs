/// Failures raised at the generation API boundary.
///
/// The `Display` output is what callers surface to end users, so each
/// variant renders the underlying provider or transport message as-is.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerationError {
    #[error("{0}")]
    Transport(String),
    #[error("Generation API returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("Generation response contained no text")]
    EmptyResponse,
    #[error("Invalid generation response: {0}")]
    InvalidResponse(String),
}
