use gemini::config::GeminiConfig;
use poem::middleware::Cors;

use super::{cors_config, server_config::ServerConfig};

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub gemini: GeminiConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            gemini: GeminiConfig::from_env(),
        }
    }
}
