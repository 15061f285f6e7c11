use crate::domain::journal::Journal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JournalDto {
    pub id: i64,
    pub name: String,
}

impl From<&Journal> for JournalDto {
    fn from(journal: &Journal) -> Self {
        Self {
            id: journal.id.into(),
            name: journal.name.to_string(),
        }
    }
}
