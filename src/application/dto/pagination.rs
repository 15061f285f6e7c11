use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{ArticleDto, JournalDto};

/// One page of a journal's public listing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JournalPage {
    pub journal: JournalDto,
    pub items: Vec<ArticleDto>,
    pub page: u32,
    pub total_pages: u64,
    pub total_count: u64,
}
