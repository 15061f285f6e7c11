// src/application/commands/articles/mod.rs
mod capability;
mod moderate;
mod service;
mod submit;

pub use moderate::SetArticleStatusCommand;
pub use service::ArticleCommandService;
pub use submit::{SubmissionMode, SubmitArticleCommand, SubmitArticleCommandBuilder};
