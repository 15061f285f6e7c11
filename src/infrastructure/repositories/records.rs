//! On-disk representation used by the JSON-file store.
//!
//! Older data files were written by earlier versions of the site and may
//! lack `id`, `slug`, `status` or use `date` instead of `createdAt`; those
//! gaps are filled the same way the database import filled them.
use super::error::invalid_record;
use crate::application::dto::serde_time;
use crate::domain::article::{
    Article, ArticleAuthor, ArticleContent, ArticleId, ArticlePrompt, ArticleSlug, ArticleStatus,
    ArticleTitle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::journal::JournalId;
use chrono::{DateTime, Utc};
use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct StoredArticle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    title: String,
    author: String,
    content: String,
    #[serde(default)]
    prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    journal_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status: Option<ArticleStatus>,
    #[serde(
        default,
        with = "serde_time::option",
        skip_serializing_if = "Option::is_none"
    )]
    created_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "serde_time::option",
        skip_serializing_if = "Option::is_none"
    )]
    updated_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "serde_time::option",
        skip_serializing_if = "Option::is_none"
    )]
    published_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "serde_time::option",
        skip_serializing_if = "Option::is_none"
    )]
    date: Option<DateTime<Utc>>,
}

/// Values assumed for fields an old record does not carry.
#[derive(Debug, Clone, Copy)]
pub(super) struct RecordDefaults {
    pub journal_id: Option<JournalId>,
    pub status: ArticleStatus,
}

impl RecordDefaults {
    /// Records in `articles.json` are moderation-queue entries.
    pub fn queue() -> Self {
        Self {
            journal_id: None,
            status: ArticleStatus::Pending,
        }
    }

    /// Records in a journal document were already public.
    pub fn journal(journal_id: JournalId) -> Self {
        Self {
            journal_id: Some(journal_id),
            status: ArticleStatus::Approved,
        }
    }
}

impl StoredArticle {
    pub fn into_article(self, defaults: RecordDefaults) -> DomainResult<Article> {
        let label = self
            .id
            .clone()
            .or_else(|| self.slug.clone())
            .unwrap_or_default();
        self.build(defaults)
            .map_err(|err| invalid_record(&label, err))
    }

    fn build(self, defaults: RecordDefaults) -> DomainResult<Article> {
        let public_by_default = defaults.status == ArticleStatus::Approved;

        let slug = self.slug.as_deref().map(decode_legacy_slug);
        let id = self
            .id
            .clone()
            .or_else(|| slug.clone())
            .ok_or_else(|| DomainError::Persistence("stored article has no id".into()))?;
        let slug = slug.unwrap_or_else(|| id.clone());
        let journal_id = match (self.journal_id, defaults.journal_id) {
            (Some(raw), _) => JournalId::new(raw)?,
            (None, Some(journal_id)) => journal_id,
            (None, None) => {
                return Err(DomainError::Persistence(format!(
                    "stored article {id} has no journalId"
                )));
            }
        };
        let created_at = self.created_at.or(self.date).ok_or_else(|| {
            DomainError::Persistence(format!("stored article {id} has no createdAt"))
        })?;
        let status = self.status.unwrap_or(defaults.status);
        let published_at = self
            .published_at
            .or_else(|| self.date.filter(|_| public_by_default));

        Ok(Article {
            id: ArticleId::new(id)?,
            title: ArticleTitle::new(self.title)?,
            author: ArticleAuthor::new(self.author)?,
            content: ArticleContent::new(self.content)?,
            prompt: ArticlePrompt::new(self.prompt),
            journal_id,
            slug: ArticleSlug::new(slug)?,
            status,
            created_at,
            updated_at: self.updated_at.unwrap_or(created_at),
            published_at: published_at.or((status == ArticleStatus::Approved).then_some(created_at)),
        })
    }
}

/// Old journal files stored slugs URL-encoded (`%E4%BA%BA...`), while request
/// paths arrive decoded. Input that does not decode to a usable slug is kept
/// as written.
fn decode_legacy_slug(raw: &str) -> String {
    match percent_decode_str(raw).decode_utf8() {
        Ok(decoded) if decoded != raw && ArticleSlug::new(decoded.as_ref()).is_ok() => {
            decoded.into_owned()
        }
        _ => raw.to_string(),
    }
}

impl From<&Article> for StoredArticle {
    fn from(article: &Article) -> Self {
        Self {
            id: Some(article.id.as_str().to_string()),
            title: article.title.as_str().to_string(),
            author: article.author.as_str().to_string(),
            content: article.content.as_str().to_string(),
            prompt: Some(article.prompt.as_str().to_string()),
            journal_id: Some(article.journal_id.into()),
            slug: Some(article.slug.as_str().to_string()),
            status: Some(article.status),
            created_at: Some(article.created_at),
            updated_at: Some(article.updated_at),
            published_at: article.published_at,
            date: None,
        }
    }
}

/// Per-journal public listing document.
#[derive(Debug, Serialize)]
pub(super) struct JournalDocument {
    pub articles: Vec<StoredArticle>,
}

/// Either the current `{ "articles": [...] }` shape or the legacy bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum JournalDocumentRead {
    Document { articles: Vec<StoredArticle> },
    Legacy(Vec<StoredArticle>),
}

impl JournalDocumentRead {
    pub fn into_records(self) -> Vec<StoredArticle> {
        match self {
            JournalDocumentRead::Document { articles } | JournalDocumentRead::Legacy(articles) => {
                articles
            }
        }
    }
}
