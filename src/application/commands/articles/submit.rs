// src/application/commands/articles/submit.rs
use super::{ArticleCommandService, capability::ensure_capability};
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{
            Article, ArticleAuthor, ArticleContent, ArticleDraft, ArticleId, ArticlePrompt,
            ArticleStatus, ArticleTitle,
        },
        errors::DomainError,
        journal::JournalId,
    },
};

const MAX_SLUG_ATTEMPTS: u32 = 8;

/// Raw submission payload. Every field is optional here so that a missing
/// field surfaces as a validation error rather than a decoding failure.
#[derive(Debug, Clone, Default)]
pub struct SubmitArticleCommand {
    pub title: Option<String>,
    pub author: Option<String>,
    pub content: Option<String>,
    pub prompt: Option<String>,
    pub journal_id: Option<i64>,
}

impl SubmitArticleCommand {
    pub fn builder() -> SubmitArticleCommandBuilder {
        SubmitArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct SubmitArticleCommandBuilder {
    command: SubmitArticleCommand,
}

impl SubmitArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.command.title = Some(title.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.command.author = Some(author.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.command.content = Some(content.into());
        self
    }

    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.command.prompt = Some(prompt.into());
        self
    }

    pub fn journal_id(mut self, journal_id: i64) -> Self {
        self.command.journal_id = Some(journal_id);
        self
    }

    pub fn build(self) -> SubmitArticleCommand {
        self.command
    }
}

/// How much review a new article needs, decided by who is calling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionMode {
    ReviewRequired,
    PreApproved,
}

impl SubmissionMode {
    fn initial_status(self) -> ArticleStatus {
        match self {
            SubmissionMode::ReviewRequired => ArticleStatus::Pending,
            SubmissionMode::PreApproved => ArticleStatus::Approved,
        }
    }
}

impl ArticleCommandService {
    /// Public submission path. Always lands in the moderation queue.
    pub async fn submit_article(
        &self,
        actor: &AuthenticatedUser,
        command: SubmitArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        ensure_capability(actor, "articles", "submit")?;
        self.store_submission(actor, command, SubmissionMode::ReviewRequired)
            .await
    }

    /// Privileged creation path. Skips moderation only when the caller asks
    /// for it and is trusted to publish.
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: SubmitArticleCommand,
        pre_approved: bool,
    ) -> ApplicationResult<ArticleDto> {
        ensure_capability(actor, "articles", "create")?;
        let mode = if pre_approved {
            ensure_capability(actor, "articles", "publish")?;
            SubmissionMode::PreApproved
        } else {
            SubmissionMode::ReviewRequired
        };
        self.store_submission(actor, command, mode).await
    }

    async fn store_submission(
        &self,
        actor: &AuthenticatedUser,
        command: SubmitArticleCommand,
        mode: SubmissionMode,
    ) -> ApplicationResult<ArticleDto> {
        let draft = validate(command)?;
        let now = self.clock.now();

        let slug = self
            .slug_service
            .generate_unique_slug(&draft.title, draft.journal_id, now)
            .await?;
        let id = ArticleId::new(self.ids.next_id())?;

        let mut article = Article::create(id, slug, draft, mode.initial_status(), now);

        // A concurrent submission can claim the slug between generation and
        // insert; regenerate against the stored state and try again.
        let mut attempt = 1;
        let stored = loop {
            match self.repo.create_or_replace(article.clone()).await {
                Ok(stored) => break stored,
                Err(DomainError::Conflict(reason)) if attempt < MAX_SLUG_ATTEMPTS => {
                    tracing::debug!(slug = %article.slug, attempt, %reason, "slug taken, regenerating");
                    attempt += 1;
                    article.slug = self
                        .slug_service
                        .generate_unique_slug(&article.title, article.journal_id, now)
                        .await?;
                }
                Err(err) => return Err(err.into()),
            }
        };

        tracing::info!(
            article_id = %stored.id,
            journal_id = %stored.journal_id,
            status = %stored.status,
            submitted_by = %actor.login,
            "article submitted"
        );
        Ok(stored.into())
    }
}

fn required(value: Option<String>, field: &str) -> ApplicationResult<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ApplicationError::validation(format!("{field} is required")))
}

fn validate(command: SubmitArticleCommand) -> ApplicationResult<ArticleDraft> {
    let SubmitArticleCommand {
        title,
        author,
        content,
        prompt,
        journal_id,
    } = command;

    let title = ArticleTitle::new(required(title, "title")?)?;
    let author = ArticleAuthor::new(required(author, "author")?)?;
    let content = ArticleContent::new(required(content, "content")?)?;
    let journal_id = journal_id
        .ok_or_else(|| ApplicationError::validation("journalId is required"))
        .and_then(|id| JournalId::new(id).map_err(ApplicationError::from))?;

    Ok(ArticleDraft {
        title,
        author,
        content,
        prompt: ArticlePrompt::new(prompt),
        journal_id,
    })
}
