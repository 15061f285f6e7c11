pub mod articles;
pub mod auth;
pub mod journals;
pub mod pagination;
pub mod serde_time;

pub use articles::ArticleDto;
pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use journals::JournalDto;
pub use pagination::JournalPage;
