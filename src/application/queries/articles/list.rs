use super::ArticleQueryService;
use crate::{
    application::{
        dto::{JournalDto, JournalPage},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{article::PageRequest, journal::JournalId},
};

pub struct ListJournalPageQuery {
    pub journal_id: i64,
    pub page: u32,
}

impl ArticleQueryService {
    /// Public listing of a journal. Pages outside `1..=total_pages` are
    /// reported as not found instead of an empty page.
    pub async fn list_journal_page(
        &self,
        query: ListJournalPageQuery,
    ) -> ApplicationResult<JournalPage> {
        let journal_id = JournalId::new(query.journal_id)
            .map_err(|_| ApplicationError::not_found("journal not found"))?;
        let request = PageRequest::new(query.page, self.page_size)
            .map_err(|_| ApplicationError::not_found("page not found"))?;

        let page = self.repo.list_approved(journal_id, request).await?;
        let total_pages = request.total_pages(page.total);
        if u64::from(request.page()) > total_pages {
            return Err(ApplicationError::not_found("page not found"));
        }

        Ok(JournalPage {
            journal: JournalDto::from(journal_id.journal()),
            items: page.items.into_iter().map(Into::into).collect(),
            page: request.page(),
            total_pages,
            total_count: page.total,
        })
    }
}
