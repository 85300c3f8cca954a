use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::connectivity::use_cases::check::{CheckConnectivityUseCase, PING_PROMPT};
use crate::domain::generation::errors::GenerationError;
use crate::domain::generation::services::ContentGeneratorService;
use crate::domain::logger::Logger;

pub struct CheckConnectivityUseCaseImpl {
    pub generator: Arc<dyn ContentGeneratorService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CheckConnectivityUseCase for CheckConnectivityUseCaseImpl {
    async fn execute(&self) -> Result<String, GenerationError> {
        self.logger.info("Sending connectivity ping to generation API");

        // Provider defaults, no JSON mode.
        let reply = self.generator.generate(PING_PROMPT, None).await;

        if let Err(err) = &reply {
            self.logger.warn(&format!("Connectivity ping failed: {}", err));
        }

        reply
    }
}
