#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("{0}")]
    Request(String),
    #[error("Model catalog returned {status}: {message}")]
    Api { status: u16, message: String },
}
