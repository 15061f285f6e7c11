use crate::domain::article::{Article, ArticleStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: String,
    pub title: String,
    pub author: String,
    pub content: String,
    pub prompt: String,
    pub journal_id: i64,
    pub slug: String,
    pub status: ArticleStatus,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
    #[serde(default, with = "serde_time::option")]
    pub published_at: Option<DateTime<Utc>>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into_inner(),
            title: article.title.into_inner(),
            author: article.author.into_inner(),
            content: article.content.into_inner(),
            prompt: article.prompt.into_inner(),
            journal_id: article.journal_id.into(),
            slug: article.slug.into_inner(),
            status: article.status,
            created_at: article.created_at,
            updated_at: article.updated_at,
            published_at: article.published_at,
        }
    }
}
