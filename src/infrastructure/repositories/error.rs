use crate::domain::errors::DomainError;
use std::path::Path;

const CNT_ARTICLE_JOURNAL_SLUG: &str = "articles_journal_slug_key";
const CNT_ARTICLE_JOURNAL: &str = "articles_journal_id_fkey";
const CNT_ARTICLE_STATUS: &str = "articles_status_chk";
const CNT_ARTICLE_APPROVED_CHECK: &str = "articles_approved_requires_timestamp_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ARTICLE_JOURNAL_SLUG => {
                        DomainError::Conflict("slug already exists in this journal".into())
                    }
                    CNT_ARTICLE_JOURNAL => DomainError::NotFound("journal not found".into()),
                    CNT_ARTICLE_STATUS => DomainError::Validation("unknown article status".into()),
                    CNT_ARTICLE_APPROVED_CHECK => {
                        DomainError::Validation("approved articles require published_at".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

pub(super) fn map_io(path: &Path, err: &std::io::Error) -> DomainError {
    DomainError::Persistence(format!("{}: {err}", path.display()))
}

pub(super) fn map_json(path: &Path, err: &serde_json::Error) -> DomainError {
    DomainError::Persistence(format!("{}: malformed JSON: {err}", path.display()))
}

/// A stored row that no longer satisfies the domain rules is a storage
/// fault, not something the caller can correct.
pub(super) fn invalid_record(id: &str, err: DomainError) -> DomainError {
    match err {
        DomainError::Validation(reason) => {
            DomainError::Persistence(format!("stored article {id} is invalid: {reason}"))
        }
        other => other,
    }
}
