// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::submit_article,
        crate::presentation::http::controllers::admin::create_article,
        crate::presentation::http::controllers::admin::list_articles,
        crate::presentation::http::controllers::admin::moderate_article,
        crate::presentation::http::controllers::admin::set_article_status,
        crate::presentation::http::controllers::journals::list_journals,
        crate::presentation::http::controllers::journals::journal_page,
        crate::presentation::http::controllers::journals::get_article,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::articles::SubmitArticleRequest,
            crate::presentation::http::controllers::admin::CreateArticleRequest,
            crate::presentation::http::controllers::admin::ModerateArticleRequest,
            crate::presentation::http::controllers::admin::SetStatusRequest,
            crate::application::dto::ArticleDto,
            crate::application::dto::JournalDto,
            crate::application::dto::JournalPage,
            crate::domain::article::ArticleStatus
        )
    ),
    tags(
        (name = "Articles", description = "Article submission"),
        (name = "Admin", description = "Moderation and privileged creation"),
        (name = "Journals", description = "Public journal listings"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    security(("bearerAuth" = [])),
    info(
        title = "AI Journal API",
        description = "Submission and moderation backend for AI-written articles",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

const DEFAULT_SERVER_URL: &str = "http://localhost:8080";

/// Registers the Biscuit bearer scheme and the advertised server list.
struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let mut bearer = Http::new(HttpAuthScheme::Bearer);
        bearer.bearer_format = Some("Biscuit".into());
        openapi
            .components
            .get_or_insert_with(Components::default)
            .add_security_scheme("bearerAuth", SecurityScheme::Http(bearer));

        let configured = env::var("PUBLIC_API_URLS").ok();
        openapi.servers = Some(
            server_urls(configured.as_deref())
                .into_iter()
                .map(Server::new)
                .collect(),
        );
    }
}

/// Comma separated list, trailing slashes dropped, first occurrence wins.
fn server_urls(raw: Option<&str>) -> Vec<String> {
    let mut urls: Vec<String> = Vec::new();
    for url in raw
        .unwrap_or_default()
        .split(',')
        .map(|part| part.trim().trim_end_matches('/'))
        .filter(|part| !part.is_empty())
    {
        if !urls.iter().any(|known| known == url) {
            urls.push(url.to_owned());
        }
    }
    if urls.is_empty() {
        urls.push(DEFAULT_SERVER_URL.to_owned());
    }
    urls
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

/// Write the current document as pretty JSON, creating parent directories.
pub fn write_openapi_snapshot(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let document = serde_json::to_vec_pretty(&ApiDoc::openapi())?;
    std::fs::write(path, document)
}
