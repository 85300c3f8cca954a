use std::sync::Arc;

use business::application::model_catalog::list::ListGenerationModelsUseCaseImpl;
use business::domain::model_catalog::use_cases::list::ListGenerationModelsUseCase;
use gemini::model_catalog::ModelCatalogGemini;
use logger::TracingLogger;

/// Prints every model that supports content generation, one per line.
///
/// Failures are printed and the process still exits successfully.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tools::init_tracing();

    let use_case = ListGenerationModelsUseCaseImpl {
        catalog: Arc::new(ModelCatalogGemini::new(tools::gemini_client())),
        logger: Arc::new(TracingLogger),
    };

    println!("Listing models...");
    match use_case.execute().await {
        Ok(names) => {
            for name in names {
                println!("{}", name);
            }
        }
        Err(err) => println!("Error: {}", err),
    }

    Ok(())
}
