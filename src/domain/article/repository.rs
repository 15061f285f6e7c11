use crate::domain::article::entity::Article;
use crate::domain::article::status::ArticleStatus;
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, PageRequest};
use crate::domain::errors::DomainResult;
use crate::domain::journal::JournalId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct ApprovedPage {
    pub items: Vec<Article>,
    pub total: u64,
}

/// Storage contract shared by the hosted database and the JSON-file store.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Insert or fully replace the article with the same id.
    async fn create_or_replace(&self, article: Article) -> DomainResult<Article>;

    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>>;

    async fn find_by_slug(
        &self,
        journal_id: JournalId,
        slug: &ArticleSlug,
    ) -> DomainResult<Option<Article>>;

    /// Approved articles of a journal, newest publication first, with the
    /// total number of approved articles in that journal.
    async fn list_approved(
        &self,
        journal_id: JournalId,
        page: PageRequest,
    ) -> DomainResult<ApprovedPage>;

    /// Apply a moderation transition. Fails with `NotFound` for unknown ids.
    async fn update_status(
        &self,
        id: &ArticleId,
        status: ArticleStatus,
        now: DateTime<Utc>,
    ) -> DomainResult<Article>;

    /// Every article regardless of status, newest first.
    async fn list_all(&self) -> DomainResult<Vec<Article>>;
}
