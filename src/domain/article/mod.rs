pub mod entity;
pub mod repository;
pub mod services;
pub mod specifications;
pub mod status;
pub mod value_objects;

pub use entity::{Article, ArticleDraft};
pub use repository::{ApprovedPage, ArticleRepository};
pub use status::{ArticleStatus, StatusTransition};
pub use value_objects::{
    ArticleAuthor, ArticleContent, ArticleId, ArticlePrompt, ArticleSlug, ArticleTitle,
    PageRequest,
};
