// src/application/commands/articles/moderate.rs
use super::{ArticleCommandService, capability::ensure_capability};
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleId, ArticleStatus},
};

pub struct SetArticleStatusCommand {
    pub id: String,
    pub status: String,
}

impl ArticleCommandService {
    /// Moderation entry point: move an article to `command.status`.
    pub async fn set_article_status(
        &self,
        actor: &AuthenticatedUser,
        command: SetArticleStatusCommand,
    ) -> ApplicationResult<ArticleDto> {
        ensure_capability(actor, "articles", "moderate")?;

        let id = ArticleId::new(command.id)
            .map_err(|_| ApplicationError::validation("article id is required"))?;
        let target: ArticleStatus = command.status.parse()?;

        let now = self.clock.now();
        let updated = self.repo.update_status(&id, target, now).await?;

        tracing::info!(
            article_id = %updated.id,
            status = %updated.status,
            moderator = %actor.login,
            "article status changed"
        );
        Ok(updated.into())
    }
}
