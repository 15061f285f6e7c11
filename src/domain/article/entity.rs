// src/domain/article/entity.rs
use crate::domain::article::status::{ArticleStatus, StatusTransition};
use crate::domain::article::value_objects::{
    ArticleAuthor, ArticleContent, ArticleId, ArticlePrompt, ArticleSlug, ArticleTitle,
};
use crate::domain::journal::JournalId;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub author: ArticleAuthor,
    pub content: ArticleContent,
    pub prompt: ArticlePrompt,
    pub journal_id: JournalId,
    pub slug: ArticleSlug,
    pub status: ArticleStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

/// Validated submission fields, before identity and state are assigned.
#[derive(Debug, Clone)]
pub struct ArticleDraft {
    pub title: ArticleTitle,
    pub author: ArticleAuthor,
    pub content: ArticleContent,
    pub prompt: ArticlePrompt,
    pub journal_id: JournalId,
}

impl Article {
    pub fn create(
        id: ArticleId,
        slug: ArticleSlug,
        draft: ArticleDraft,
        initial_status: ArticleStatus,
        now: DateTime<Utc>,
    ) -> Self {
        let ArticleDraft {
            title,
            author,
            content,
            prompt,
            journal_id,
        } = draft;

        Self {
            id,
            title,
            author,
            content,
            prompt,
            journal_id,
            slug,
            status: initial_status,
            created_at: now,
            updated_at: now,
            published_at: (initial_status == ArticleStatus::Approved).then_some(now),
        }
    }

    /// Move to `target`, stamping `updated_at`. The first entry into
    /// `approved` sets `published_at`; later approvals keep it and nothing
    /// ever clears it.
    pub fn set_status(&mut self, target: ArticleStatus, now: DateTime<Utc>) -> StatusTransition {
        let transition = self.status.transition_to(target);
        self.apply_transition(transition, now);
        transition
    }

    pub fn apply_transition(&mut self, transition: StatusTransition, now: DateTime<Utc>) {
        self.status = transition.to;
        self.updated_at = now;
        if transition.publishes() && self.published_at.is_none() {
            self.published_at = Some(now);
        }
    }

    pub fn is_public(&self) -> bool {
        self.status == ArticleStatus::Approved
    }

    /// Public listing order: latest `published_at` first, unpublished last,
    /// then latest `created_at`.
    pub fn listing_order(a: &Article, b: &Article) -> Ordering {
        match (a.published_at, b.published_at) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
        .then_with(|| b.created_at.cmp(&a.created_at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn draft() -> ArticleDraft {
        ArticleDraft {
            title: ArticleTitle::new("A").unwrap(),
            author: ArticleAuthor::new("X").unwrap(),
            content: ArticleContent::new("...").unwrap(),
            prompt: ArticlePrompt::default(),
            journal_id: JournalId::new(1).unwrap(),
        }
    }

    fn sample_article(status: ArticleStatus) -> Article {
        Article::create(
            ArticleId::new("id-1").unwrap(),
            ArticleSlug::new("a-1").unwrap(),
            draft(),
            status,
            Utc::now(),
        )
    }

    #[test]
    fn create_pending_has_no_publish_time() {
        let article = sample_article(ArticleStatus::Pending);
        assert_eq!(article.status, ArticleStatus::Pending);
        assert_eq!(article.created_at, article.updated_at);
        assert!(article.published_at.is_none());
    }

    #[test]
    fn create_pre_approved_is_published_immediately() {
        let article = sample_article(ArticleStatus::Approved);
        assert_eq!(article.published_at, Some(article.created_at));
        assert!(article.is_public());
    }

    #[test]
    fn approval_stamps_publish_and_update_times() {
        let mut article = sample_article(ArticleStatus::Pending);
        let now = article.created_at + Duration::seconds(5);
        article.set_status(ArticleStatus::Approved, now);
        assert_eq!(article.status, ArticleStatus::Approved);
        assert_eq!(article.updated_at, now);
        assert_eq!(article.published_at, Some(now));
    }

    #[test]
    fn reapproval_keeps_first_publish_time() {
        let mut article = sample_article(ArticleStatus::Pending);
        let first = article.created_at + Duration::seconds(5);
        article.set_status(ArticleStatus::Approved, first);
        let later = first + Duration::seconds(5);
        article.set_status(ArticleStatus::Approved, later);
        assert_eq!(article.published_at, Some(first));
        assert_eq!(article.updated_at, later);
    }

    #[test]
    fn rejection_never_clears_publish_time() {
        let mut article = sample_article(ArticleStatus::Pending);
        let approved_at = article.created_at + Duration::seconds(1);
        article.set_status(ArticleStatus::Approved, approved_at);
        let transition =
            article.set_status(ArticleStatus::Rejected, approved_at + Duration::seconds(1));
        assert!(transition.withdraws());
        assert!(!article.is_public());
        assert_eq!(article.published_at, Some(approved_at));
    }

    #[test]
    fn listing_order_prefers_latest_publication() {
        let base = Utc::now();
        let mut older = sample_article(ArticleStatus::Pending);
        older.set_status(ArticleStatus::Approved, base);
        let mut newer = sample_article(ArticleStatus::Pending);
        newer.set_status(ArticleStatus::Approved, base + Duration::seconds(1));
        let unpublished = sample_article(ArticleStatus::Pending);

        let mut items = vec![unpublished.clone(), older.clone(), newer.clone()];
        items.sort_by(Article::listing_order);
        assert_eq!(items, vec![newer, older, unpublished]);
    }
}
