// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{admin, articles, journals},
    middleware::rate_limit::{SubmissionRateLimit, submission_rate_limit},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    routing::{MethodRouter, get, patch, post},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// Router without submission throttling. Used by tests, which drive the
/// service without a peer address.
pub fn build_router(state: HttpState) -> Router {
    build_router_with_rate_limiter(state, false)
}

pub fn build_router_with_rate_limiter(state: HttpState, rate_limited: bool) -> Router {
    let cors = cors_layer(&state.allowed_origins);

    let limit = if rate_limited {
        submission_rate_limit()
    } else {
        None
    };

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route(
            "/articles",
            throttled(post(articles::submit_article), limit.as_ref()),
        )
        .route(
            "/admin/articles",
            throttled(post(admin::create_article), limit.as_ref())
                .get(admin::list_articles)
                .patch(admin::moderate_article),
        )
        .route("/journals", get(journals::list_journals))
        .route("/journals/{journal_id}", get(journals::journal_page))
        .route("/journals/{journal_id}/{slug}", get(journals::get_article))
        .route("/admin/articles/{id}", patch(admin::set_article_status))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

fn throttled(route: MethodRouter, limit: Option<&SubmissionRateLimit>) -> MethodRouter {
    match limit {
        Some(limit) => route.route_layer(limit.clone()),
        None => route,
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
