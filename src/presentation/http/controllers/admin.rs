// src/presentation/http/controllers/admin.rs
use crate::application::{
    commands::articles::SetArticleStatusCommand,
    dto::{ArticleDto, AuthenticatedUser},
};
use crate::domain::article::ArticleStatus;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

use super::articles::SubmitArticleRequest;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleRequest {
    #[serde(flatten)]
    pub article: SubmitArticleRequest,
    /// Publish immediately, skipping the moderation queue.
    #[serde(default)]
    pub pre_approved: bool,
}

/// Moderation body for `PATCH /admin/articles`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ModerateArticleRequest {
    pub id: Option<String>,
    #[schema(value_type = Option<ArticleStatus>)]
    pub status: Option<String>,
}

/// Moderation body for `PATCH /admin/articles/{id}`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SetStatusRequest {
    #[schema(value_type = Option<ArticleStatus>)]
    pub status: Option<String>,
}

#[utoipa::path(
    post,
    path = "/admin/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article stored.", body = ArticleDto),
        (status = 400, description = "Missing or invalid field.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Caller may not create articles.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let article = state
        .services
        .article_commands
        .create_article(&user, payload.article.into(), payload.pre_approved)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(article)))
}

#[utoipa::path(
    get,
    path = "/admin/articles",
    responses(
        (status = 200, description = "Every article, newest first.", body = [ArticleDto]),
        (status = 401, description = "Caller is not a moderator.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_all_articles(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    patch,
    path = "/admin/articles",
    request_body = ModerateArticleRequest,
    responses(
        (status = 200, description = "Updated article.", body = ArticleDto),
        (status = 400, description = "Missing id or unknown status.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Caller is not a moderator.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn moderate_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<ModerateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    set_status(
        &state,
        &user,
        payload.id.unwrap_or_default(),
        payload.status,
    )
    .await
}

#[utoipa::path(
    patch,
    path = "/admin/articles/{id}",
    params(("id" = String, Path, description = "Article id")),
    request_body = SetStatusRequest,
    responses(
        (status = 200, description = "Updated article.", body = ArticleDto),
        (status = 400, description = "Unknown status.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Caller is not a moderator.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn set_article_status(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
    Json(payload): Json<SetStatusRequest>,
) -> HttpResult<Json<ArticleDto>> {
    set_status(&state, &user, id, payload.status).await
}

async fn set_status(
    state: &HttpState,
    user: &AuthenticatedUser,
    id: String,
    status: Option<String>,
) -> HttpResult<Json<ArticleDto>> {
    // Missing fields are reported by the command, after the moderator check.
    let command = SetArticleStatusCommand {
        id,
        status: status.unwrap_or_default(),
    };
    state
        .services
        .article_commands
        .set_article_status(user, command)
        .await
        .into_http()
        .map(Json)
}
