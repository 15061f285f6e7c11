// src/infrastructure/repositories/mod.rs
mod error;
mod json_file_article;
mod postgres_article;
mod records;

pub use error::map_sqlx;
pub use json_file_article::JsonFileArticleRepository;
pub use postgres_article::PostgresArticleRepository;
