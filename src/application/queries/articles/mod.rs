mod get;
mod list;
mod list_all;
mod service;

pub use get::GetArticleQuery;
pub use list::ListJournalPageQuery;
pub use service::{ArticleQueryService, DEFAULT_PAGE_SIZE};
