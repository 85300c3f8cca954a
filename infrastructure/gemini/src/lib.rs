pub mod client;
pub mod config;
pub mod content_generator;
pub mod model_catalog;
