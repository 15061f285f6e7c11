use super::ArticleQueryService;
use crate::application::{
    dto::{ArticleDto, AuthenticatedUser},
    error::{ApplicationError, ApplicationResult},
};

impl ArticleQueryService {
    /// Moderation queue view: every article regardless of status.
    pub async fn list_all_articles(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        if !actor.has_capability("articles", "view:any") {
            return Err(ApplicationError::unauthorized(
                "missing capability articles:view:any",
            ));
        }

        let articles = self.repo.list_all().await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }
}
