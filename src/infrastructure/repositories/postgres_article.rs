// src/infrastructure/repositories/postgres_article.rs
use super::error::invalid_record;
use super::map_sqlx;
use crate::domain::article::{
    ApprovedPage, Article, ArticleAuthor, ArticleContent, ArticleId, ArticlePrompt,
    ArticleRepository, ArticleSlug, ArticleStatus, ArticleTitle, PageRequest,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::journal::JournalId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const ARTICLE_COLUMNS: &str = "id, title, author, content, prompt, journal_id, slug, status, \
     created_at, updated_at, published_at";

#[derive(Clone)]
pub struct PostgresArticleRepository {
    pool: PgPool,
}

impl PostgresArticleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: String,
    title: String,
    author: String,
    content: String,
    prompt: String,
    journal_id: i16,
    slug: String,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    published_at: Option<DateTime<Utc>>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        let id = row.id.clone();
        row.into_article().map_err(|err| invalid_record(&id, err))
    }
}

impl ArticleRow {
    fn into_article(self) -> DomainResult<Article> {
        Ok(Article {
            id: ArticleId::new(self.id)?,
            title: ArticleTitle::new(self.title)?,
            author: ArticleAuthor::new(self.author)?,
            content: ArticleContent::new(self.content)?,
            prompt: ArticlePrompt::new(Some(self.prompt)),
            journal_id: JournalId::new(i64::from(self.journal_id))?,
            slug: ArticleSlug::new(self.slug)?,
            status: self
                .status
                .parse()
                .map_err(|_| DomainError::Persistence(format!("unknown status {}", self.status)))?,
            created_at: self.created_at,
            updated_at: self.updated_at,
            published_at: self.published_at,
        })
    }
}

#[async_trait]
impl ArticleRepository for PostgresArticleRepository {
    async fn create_or_replace(&self, article: Article) -> DomainResult<Article> {
        let sql = format!(
            "INSERT INTO articles ({ARTICLE_COLUMNS})
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             ON CONFLICT (id) DO UPDATE SET
                title = EXCLUDED.title,
                author = EXCLUDED.author,
                content = EXCLUDED.content,
                prompt = EXCLUDED.prompt,
                journal_id = EXCLUDED.journal_id,
                slug = EXCLUDED.slug,
                status = EXCLUDED.status,
                updated_at = EXCLUDED.updated_at,
                published_at = COALESCE(articles.published_at, EXCLUDED.published_at)
             RETURNING {ARTICLE_COLUMNS}"
        );

        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(article.id.as_str())
            .bind(article.title.as_str())
            .bind(article.author.as_str())
            .bind(article.content.as_str())
            .bind(article.prompt.as_str())
            .bind(i16::from(article.journal_id))
            .bind(article.slug.as_str())
            .bind(article.status.as_str())
            .bind(article.created_at)
            .bind(article.updated_at)
            .bind(article.published_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_by_slug(
        &self,
        journal_id: JournalId,
        slug: &ArticleSlug,
    ) -> DomainResult<Option<Article>> {
        let sql =
            format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE journal_id = $1 AND slug = $2");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i16::from(journal_id))
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list_approved(
        &self,
        journal_id: JournalId,
        page: PageRequest,
    ) -> DomainResult<ApprovedPage> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM articles WHERE journal_id = $1 AND status = 'approved'",
        )
        .bind(i16::from(journal_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let offset = i64::try_from(page.offset())
            .map_err(|_| DomainError::Validation("page out of range".into()))?;
        let sql = format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles
             WHERE journal_id = $1 AND status = 'approved'
             ORDER BY published_at DESC NULLS LAST, created_at DESC
             LIMIT $2 OFFSET $3"
        );
        let rows = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i16::from(journal_id))
            .bind(i64::from(page.page_size()))
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let items = rows
            .into_iter()
            .map(Article::try_from)
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(ApprovedPage {
            items,
            total: u64::try_from(total).unwrap_or(0),
        })
    }

    async fn update_status(
        &self,
        id: &ArticleId,
        status: ArticleStatus,
        now: DateTime<Utc>,
    ) -> DomainResult<Article> {
        // The first approval stamps published_at; later transitions keep it.
        let sql = format!(
            "UPDATE articles SET
                status = $2,
                updated_at = $3,
                published_at = CASE WHEN $2 = 'approved'
                    THEN COALESCE(published_at, $3)
                    ELSE published_at END
             WHERE id = $1
             RETURNING {ARTICLE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(id.as_str())
            .bind(status.as_str())
            .bind(now)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        match row {
            Some(row) => Article::try_from(row),
            None => Err(DomainError::NotFound("article not found".into())),
        }
    }

    async fn list_all(&self) -> DomainResult<Vec<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles ORDER BY created_at DESC");
        let rows = sqlx::query_as::<_, ArticleRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }
}
