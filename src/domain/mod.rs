pub mod article;
pub mod errors;
pub mod journal;
pub mod user;
