use std::path::Path;
use std::sync::Arc;

use business::application::connectivity::check::CheckConnectivityUseCaseImpl;
use business::domain::connectivity::use_cases::check::CheckConnectivityUseCase;
use gemini::content_generator::ContentGeneratorGemini;
use logger::TracingLogger;

/// Sends a one-word prompt to the configured model.
///
/// On failure the error text goes to `error_log.txt` instead of stdout.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tools::init_tracing();

    let use_case = CheckConnectivityUseCaseImpl {
        generator: Arc::new(ContentGeneratorGemini::new(tools::gemini_client())),
        logger: Arc::new(TracingLogger),
    };

    match use_case.execute().await {
        Ok(reply) => println!("Success: {}", reply),
        Err(err) => {
            tools::write_error_log(Path::new(tools::ERROR_LOG_PATH), &err.to_string()).await?;
            println!("Error occurred, check {}", tools::ERROR_LOG_PATH);
        }
    }

    Ok(())
}
