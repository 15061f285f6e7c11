// tests/support/mocks/repos.rs
use ai_journal::domain::article::{
    ApprovedPage, Article, ArticleId, ArticleRepository, ArticleSlug, ArticleStatus, PageRequest,
};
use ai_journal::domain::errors::{DomainError, DomainResult};
use ai_journal::domain::journal::JournalId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

/// Single-table store with the same visibility rules as the real backends.
#[derive(Debug, Default)]
pub struct InMemoryArticleRepository {
    articles: Mutex<Vec<Article>>,
}

impl InMemoryArticleRepository {
    pub async fn snapshot(&self) -> Vec<Article> {
        self.articles.lock().await.clone()
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn create_or_replace(&self, article: Article) -> DomainResult<Article> {
        let mut articles = self.articles.lock().await;
        let taken = articles.iter().any(|existing| {
            existing.id != article.id
                && existing.journal_id == article.journal_id
                && existing.slug == article.slug
        });
        if taken {
            return Err(DomainError::Conflict(
                "slug already exists in this journal".into(),
            ));
        }
        match articles.iter_mut().find(|existing| existing.id == article.id) {
            Some(existing) => *existing = article.clone(),
            None => articles.push(article.clone()),
        }
        Ok(article)
    }

    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>> {
        let articles = self.articles.lock().await;
        Ok(articles.iter().find(|article| &article.id == id).cloned())
    }

    async fn find_by_slug(
        &self,
        journal_id: JournalId,
        slug: &ArticleSlug,
    ) -> DomainResult<Option<Article>> {
        let articles = self.articles.lock().await;
        Ok(articles
            .iter()
            .find(|article| article.journal_id == journal_id && &article.slug == slug)
            .cloned())
    }

    async fn list_approved(
        &self,
        journal_id: JournalId,
        page: PageRequest,
    ) -> DomainResult<ApprovedPage> {
        let articles = self.articles.lock().await;
        let mut listed: Vec<Article> = articles
            .iter()
            .filter(|article| article.journal_id == journal_id && article.is_public())
            .cloned()
            .collect();
        listed.sort_by(Article::listing_order);

        let total = listed.len() as u64;
        let items = listed
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.page_size() as usize)
            .collect();
        Ok(ApprovedPage { items, total })
    }

    async fn update_status(
        &self,
        id: &ArticleId,
        status: ArticleStatus,
        now: DateTime<Utc>,
    ) -> DomainResult<Article> {
        let mut articles = self.articles.lock().await;
        let article = articles
            .iter_mut()
            .find(|article| &article.id == id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        article.set_status(status, now);
        Ok(article.clone())
    }

    async fn list_all(&self) -> DomainResult<Vec<Article>> {
        let mut articles = self.articles.lock().await.clone();
        articles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(articles)
    }
}
