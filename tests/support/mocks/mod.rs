// tests/support/mocks/mod.rs
pub mod repos;
pub mod security;
pub mod time;
pub mod util;

pub use repos::InMemoryArticleRepository;
pub use security::{ADMIN_TOKEN, DummyTokenManager, EXPIRED_TOKEN, SERVICE_TOKEN, USER_TOKEN};
pub use time::{TestClock, fixed_now};
pub use util::SequentialIds;
