// src/domain/article/services/mod.rs
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::ports::util::SlugGenerator;
use crate::domain::article::repository::ArticleRepository;
use crate::domain::article::value_objects::{ArticleSlug, ArticleTitle};
use crate::domain::errors::DomainResult;
use crate::domain::journal::JournalId;

const FALLBACK_SLUG: &str = "article";

/// Domain service producing slugs that are unique within a journal.
pub struct ArticleSlugService {
    repo: Arc<dyn ArticleRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl ArticleSlugService {
    pub fn new(repo: Arc<dyn ArticleRepository>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self { repo, generator }
    }

    /// `<slugified-title>-<unix millis>`, with a counter appended while the
    /// candidate is already taken in the journal.
    pub async fn generate_unique_slug(
        &self,
        title: &ArticleTitle,
        journal_id: JournalId,
        now: DateTime<Utc>,
    ) -> DomainResult<ArticleSlug> {
        let slugified = self.generator.slugify(title.as_str());
        let base = if slugified.is_empty() {
            FALLBACK_SLUG
        } else {
            slugified.as_str()
        };
        let base_slug = format!("{base}-{}", now.timestamp_millis());

        let mut candidate = base_slug.clone();
        let mut counter = 1u64;

        loop {
            let slug = ArticleSlug::new(candidate)?;
            if self.repo.find_by_slug(journal_id, &slug).await?.is_none() {
                return Ok(slug);
            }
            candidate = format!("{base_slug}-{counter}");
            counter += 1;
        }
    }
}
