pub mod text_extractor;

#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;
