use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{Article, ArticleId, ArticleSlug, specifications::CanViewArticleSpec},
        journal::JournalId,
    },
};

pub struct GetArticleQuery {
    pub journal_id: i64,
    /// A slug, or for privileged callers also an article id.
    pub identifier: String,
}

impl ArticleQueryService {
    /// Single-article view. Anything the caller may not see is reported as
    /// not found so unapproved articles never leak.
    pub async fn get_article(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: GetArticleQuery,
    ) -> ApplicationResult<ArticleDto> {
        let journal_id = JournalId::new(query.journal_id).map_err(|_| not_found())?;
        let privileged = actor.is_some_and(|user| user.has_capability("articles", "view:any"));

        let found = if privileged {
            self.find_by_id_or_slug(journal_id, &query.identifier).await?
        } else {
            self.find_by_slug(journal_id, &query.identifier).await?
        };

        let article = found.ok_or_else(not_found)?;
        let spec = CanViewArticleSpec::new(actor.map(|user| &user.capabilities), &article);
        if !spec.is_satisfied() {
            return Err(not_found());
        }

        Ok(article.into())
    }

    async fn find_by_id_or_slug(
        &self,
        journal_id: JournalId,
        identifier: &str,
    ) -> ApplicationResult<Option<Article>> {
        if let Ok(id) = ArticleId::new(identifier) {
            if let Some(article) = self.repo.find_by_id(&id).await? {
                return Ok(Some(article));
            }
        }
        self.find_by_slug(journal_id, identifier).await
    }

    async fn find_by_slug(
        &self,
        journal_id: JournalId,
        identifier: &str,
    ) -> ApplicationResult<Option<Article>> {
        let Ok(slug) = ArticleSlug::new(identifier) else {
            return Ok(None);
        };
        Ok(self.repo.find_by_slug(journal_id, &slug).await?)
    }
}

fn not_found() -> ApplicationError {
    ApplicationError::not_found("article not found")
}
