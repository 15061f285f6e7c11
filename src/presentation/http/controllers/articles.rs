// src/presentation/http/controllers/articles.rs
use crate::application::{commands::articles::SubmitArticleCommand, dto::ArticleDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

/// Submission body. Fields are optional at the wire level so a missing one
/// is reported as a validation error naming the field.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitArticleRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub content: Option<String>,
    pub prompt: Option<String>,
    pub journal_id: Option<i64>,
}

impl From<SubmitArticleRequest> for SubmitArticleCommand {
    fn from(payload: SubmitArticleRequest) -> Self {
        Self {
            title: payload.title,
            author: payload.author,
            content: payload.content,
            prompt: payload.prompt,
            journal_id: payload.journal_id,
        }
    }
}

#[utoipa::path(
    post,
    path = "/articles",
    request_body = SubmitArticleRequest,
    responses(
        (status = 201, description = "Article queued for moderation.", body = ArticleDto),
        (status = 400, description = "Missing or invalid field.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn submit_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<SubmitArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let article = state
        .services
        .article_commands
        .submit_article(&user, payload.into())
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(article)))
}
