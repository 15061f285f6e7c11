// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{ClockPort, IdGeneratorPort},
    domain::article::{ArticleRepository, services::ArticleSlugService},
};

pub struct ArticleCommandService {
    pub(super) repo: Arc<dyn ArticleRepository>,
    pub(super) slug_service: Arc<ArticleSlugService>,
    pub(super) ids: Arc<IdGeneratorPort>,
    pub(super) clock: Arc<ClockPort>,
}

impl ArticleCommandService {
    pub fn new(
        repo: Arc<dyn ArticleRepository>,
        slug_service: Arc<ArticleSlugService>,
        ids: Arc<IdGeneratorPort>,
        clock: Arc<ClockPort>,
    ) -> Self {
        Self {
            repo,
            slug_service,
            ids,
            clock,
        }
    }
}
