// src/infrastructure/repositories/json_file_article.rs
use super::error::{map_io, map_json};
use super::records::{JournalDocument, JournalDocumentRead, RecordDefaults, StoredArticle};
use crate::domain::article::{
    ApprovedPage, Article, ArticleId, ArticleRepository, ArticleSlug, ArticleStatus, PageRequest,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::journal::{JournalId, journals};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

const ARTICLES_FILE: &str = "articles.json";

/// File-backed store: `articles.json` holds every article, and one
/// `subjournal_{id}.json` per journal holds the approved ones.
///
/// Each write reads whole documents, edits them in memory and rewrites them.
/// Writers inside this process are serialized; a crash during a write can
/// still leave a truncated file, and separate processes sharing the
/// directory can lose updates.
pub struct JsonFileArticleRepository {
    data_dir: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileArticleRepository {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    fn articles_path(&self) -> PathBuf {
        self.data_dir.join(ARTICLES_FILE)
    }

    fn journal_path(&self, journal_id: JournalId) -> PathBuf {
        self.data_dir.join(format!("subjournal_{journal_id}.json"))
    }

    async fn read_file(path: &Path) -> DomainResult<Option<Vec<u8>>> {
        match tokio::fs::read(path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "data file missing, treating as empty");
                Ok(None)
            }
            Err(err) => Err(map_io(path, &err)),
        }
    }

    async fn write_file<T: Serialize + Sync>(&self, path: &Path, value: &T) -> DomainResult<()> {
        tokio::fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|err| map_io(&self.data_dir, &err))?;
        let bytes = serde_json::to_vec_pretty(value).map_err(|err| map_json(path, &err))?;
        tokio::fs::write(path, bytes)
            .await
            .map_err(|err| map_io(path, &err))
    }

    async fn read_queue(&self) -> DomainResult<Vec<Article>> {
        let path = self.articles_path();
        let Some(bytes) = Self::read_file(&path).await? else {
            return Ok(Vec::new());
        };
        let records: Vec<StoredArticle> =
            serde_json::from_slice(&bytes).map_err(|err| map_json(&path, &err))?;
        records
            .into_iter()
            .map(|record| record.into_article(RecordDefaults::queue()))
            .collect()
    }

    async fn write_queue(&self, articles: &[Article]) -> DomainResult<()> {
        let records: Vec<StoredArticle> = articles.iter().map(StoredArticle::from).collect();
        self.write_file(&self.articles_path(), &records).await
    }

    async fn read_journal(&self, journal_id: JournalId) -> DomainResult<Vec<Article>> {
        let path = self.journal_path(journal_id);
        let Some(bytes) = Self::read_file(&path).await? else {
            return Ok(Vec::new());
        };
        let document: JournalDocumentRead =
            serde_json::from_slice(&bytes).map_err(|err| map_json(&path, &err))?;
        document
            .into_records()
            .into_iter()
            .map(|record| record.into_article(RecordDefaults::journal(journal_id)))
            .collect()
    }

    async fn write_journal(&self, journal_id: JournalId, articles: &[Article]) -> DomainResult<()> {
        let document = JournalDocument {
            articles: articles.iter().map(StoredArticle::from).collect(),
        };
        self.write_file(&self.journal_path(journal_id), &document)
            .await
    }

    /// Every known article: the queue file plus journal entries that only
    /// exist in a journal document.
    async fn read_catalog(&self) -> DomainResult<Vec<Article>> {
        let mut catalog = self.read_queue().await?;
        for journal in journals() {
            for article in self.read_journal(journal.id).await? {
                if !catalog.iter().any(|known| known.id == article.id) {
                    catalog.push(article);
                }
            }
        }
        Ok(catalog)
    }

    async fn publish_to_journal(&self, article: &Article) -> DomainResult<()> {
        let mut listed = self.read_journal(article.journal_id).await?;
        match listed.iter_mut().find(|entry| entry.id == article.id) {
            Some(entry) => *entry = article.clone(),
            None => listed.push(article.clone()),
        }
        self.write_journal(article.journal_id, &listed).await
    }

    async fn withdraw_from_journal(&self, journal_id: JournalId, id: &ArticleId) -> DomainResult<()> {
        let mut listed = self.read_journal(journal_id).await?;
        let before = listed.len();
        listed.retain(|entry| &entry.id != id);
        if listed.len() == before {
            return Ok(());
        }
        self.write_journal(journal_id, &listed).await
    }
}

#[async_trait]
impl ArticleRepository for JsonFileArticleRepository {
    async fn create_or_replace(&self, article: Article) -> DomainResult<Article> {
        let _guard = self.write_lock.lock().await;

        let slug_taken = self.read_catalog().await?.iter().any(|entry| {
            entry.journal_id == article.journal_id
                && entry.slug == article.slug
                && entry.id != article.id
        });
        if slug_taken {
            return Err(DomainError::Conflict(format!(
                "slug {} already exists in journal {}",
                article.slug, article.journal_id
            )));
        }

        let mut queue = self.read_queue().await?;
        let previous_journal = match queue.iter_mut().find(|entry| entry.id == article.id) {
            Some(entry) => {
                let journal = entry.journal_id;
                *entry = article.clone();
                Some(journal)
            }
            None => {
                queue.push(article.clone());
                None
            }
        };
        self.write_queue(&queue).await?;

        if let Some(journal_id) = previous_journal.filter(|id| *id != article.journal_id) {
            self.withdraw_from_journal(journal_id, &article.id).await?;
        }
        if article.is_public() {
            self.publish_to_journal(&article).await?;
        } else {
            self.withdraw_from_journal(article.journal_id, &article.id)
                .await?;
        }

        Ok(article)
    }

    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>> {
        Ok(self
            .read_catalog()
            .await?
            .into_iter()
            .find(|article| &article.id == id))
    }

    async fn find_by_slug(
        &self,
        journal_id: JournalId,
        slug: &ArticleSlug,
    ) -> DomainResult<Option<Article>> {
        Ok(self
            .read_catalog()
            .await?
            .into_iter()
            .find(|article| article.journal_id == journal_id && &article.slug == slug))
    }

    async fn list_approved(
        &self,
        journal_id: JournalId,
        page: PageRequest,
    ) -> DomainResult<ApprovedPage> {
        let mut listed: Vec<Article> = self
            .read_journal(journal_id)
            .await?
            .into_iter()
            .filter(Article::is_public)
            .collect();
        listed.sort_by(Article::listing_order);

        let total = listed.len() as u64;
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let items = listed
            .into_iter()
            .skip(offset)
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
        let _guard = self.write_lock.lock().await;

        let mut catalog = self.read_catalog().await?;
        let article = catalog
            .iter_mut()
            .find(|article| &article.id == id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        let transition = article.set_status(status, now);
        let updated = article.clone();

        self.write_queue(&catalog).await?;
        if transition.publishes() {
            self.publish_to_journal(&updated).await?;
        } else if transition.withdraws() {
            self.withdraw_from_journal(updated.journal_id, &updated.id)
                .await?;
        }

        Ok(updated)
    }

    async fn list_all(&self) -> DomainResult<Vec<Article>> {
        let mut catalog = self.read_catalog().await?;
        catalog.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(catalog)
    }
}
