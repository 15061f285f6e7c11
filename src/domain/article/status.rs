// src/domain/article/status.rs
use crate::domain::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

/// Moderation state of an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ArticleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Pending => "pending",
            ArticleStatus::Approved => "approved",
            ArticleStatus::Rejected => "rejected",
        }
    }

    /// Every status may move to every other status, including itself.
    /// Moderators can re-review an article at any time, so there is no
    /// terminal state and no guard on the current status.
    pub fn transition_to(self, target: ArticleStatus) -> StatusTransition {
        StatusTransition {
            from: self,
            to: target,
        }
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ArticleStatus::Pending),
            "approved" => Ok(ArticleStatus::Approved),
            "rejected" => Ok(ArticleStatus::Rejected),
            other => Err(DomainError::Validation(format!(
                "unknown article status '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTransition {
    pub from: ArticleStatus,
    pub to: ArticleStatus,
}

impl StatusTransition {
    /// The article ends up publicly listed.
    pub fn publishes(&self) -> bool {
        self.to == ArticleStatus::Approved
    }

    /// The article was public and no longer is.
    pub fn withdraws(&self) -> bool {
        self.from == ArticleStatus::Approved && self.to != ArticleStatus::Approved
    }
}
