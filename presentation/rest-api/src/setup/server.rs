use poem::{
    Endpoint, EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing,
};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = Self::routes(container, &addr).with(config.cors).with(Tracing);

        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }

    /// Mounts the upload page, the API and its documentation.
    pub fn routes(container: DependencyContainer, addr: &str) -> impl Endpoint + use<> {
        let api_service = OpenApiService::new(
            (
                container.health_api,
                container.page_api,
                container.report_api,
            ),
            "Health Report Analyzer API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("http://{}", addr));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();

        Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
    }
}
