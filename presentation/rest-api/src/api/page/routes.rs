use poem_openapi::{
    ApiResponse, OpenApi,
    payload::{Html, PlainText},
};

const INDEX_HTML: &str = include_str!("../../../static/index.html");
const SCRIPT_JS: &str = include_str!("../../../static/script.js");

/// Static upload page served alongside the API.
pub struct PageApi;

#[derive(ApiResponse)]
pub enum ScriptResponse {
    #[oai(status = 200, content_type = "application/javascript")]
    Ok(PlainText<&'static str>),
}

#[OpenApi]
impl PageApi {
    #[oai(path = "/", method = "get", hidden)]
    async fn index(&self) -> Html<&'static str> {
        Html(INDEX_HTML)
    }

    #[oai(path = "/static/script.js", method = "get", hidden)]
    async fn script(&self) -> ScriptResponse {
        ScriptResponse::Ok(PlainText(SCRIPT_JS))
    }
}
