// src/presentation/http/controllers/journals.rs
use crate::application::{
    dto::{ArticleDto, JournalDto, JournalPage},
    error::ApplicationError,
    queries::{
        articles::{GetArticleQuery, ListJournalPageQuery},
        journals::list_journals as journal_table,
    },
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::MaybeAuthenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct JournalPageParams {
    /// 1-based page number; defaults to the first page.
    pub page: Option<String>,
}

fn not_found(what: &str) -> HttpError {
    HttpError::from_error(ApplicationError::not_found(format!("{what} not found")))
}

/// Path and query segments are free text; anything that is not a number
/// simply names nothing.
fn parse_journal_id(raw: &str) -> HttpResult<i64> {
    raw.trim().parse().map_err(|_| not_found("journal"))
}

fn parse_page(raw: Option<&str>) -> HttpResult<u32> {
    match raw.map(str::trim).filter(|value| !value.is_empty()) {
        None => Ok(1),
        Some(value) => value.parse().map_err(|_| not_found("page")),
    }
}

#[utoipa::path(
    get,
    path = "/journals",
    responses(
        (status = 200, description = "The fixed list of sub-journals.", body = [JournalDto])
    ),
    tag = "Journals"
)]
pub async fn list_journals() -> Json<Vec<JournalDto>> {
    Json(journal_table())
}

#[utoipa::path(
    get,
    path = "/journals/{journalId}",
    params(
        ("journalId" = i64, Path, description = "Journal id, 0 to 3"),
        JournalPageParams
    ),
    responses(
        (status = 200, description = "One page of approved articles.", body = JournalPage),
        (status = 404, description = "Unknown journal or page out of range.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Journals"
)]
pub async fn journal_page(
    Extension(state): Extension<HttpState>,
    Path(journal_id): Path<String>,
    Query(params): Query<JournalPageParams>,
) -> HttpResult<Json<JournalPage>> {
    let query = ListJournalPageQuery {
        journal_id: parse_journal_id(&journal_id)?,
        page: parse_page(params.page.as_deref())?,
    };
    state
        .services
        .article_queries
        .list_journal_page(query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/journals/{journalId}/{slug}",
    params(
        ("journalId" = i64, Path, description = "Journal id, 0 to 3"),
        ("slug" = String, Path, description = "Article slug; moderators may also pass an article id")
    ),
    responses(
        (status = 200, description = "The article.", body = ArticleDto),
        (status = 404, description = "No visible article under that name.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Journals"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path((journal_id, identifier)): Path<(String, String)>,
) -> HttpResult<Json<ArticleDto>> {
    let query = GetArticleQuery {
        journal_id: parse_journal_id(&journal_id)?,
        identifier,
    };
    state
        .services
        .article_queries
        .get_article(actor.0.as_ref(), query)
        .await
        .into_http()
        .map(Json)
}
