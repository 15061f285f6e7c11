// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::articles::ArticleCommandService,
        ports::{ClockPort, IdGeneratorPort, SlugGeneratorPort, TokenManagerPort},
        queries::articles::ArticleQueryService,
    },
    domain::article::{ArticleRepository, services::ArticleSlugService},
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    token_manager: Arc<TokenManagerPort>,
}

impl ApplicationServices {
    pub fn new(
        article_repo: Arc<dyn ArticleRepository>,
        token_manager: Arc<TokenManagerPort>,
        clock: Arc<ClockPort>,
        slugger: Arc<SlugGeneratorPort>,
        ids: Arc<IdGeneratorPort>,
        page_size: u32,
    ) -> Self {
        let slug_service = Arc::new(ArticleSlugService::new(
            Arc::clone(&article_repo),
            Arc::clone(&slugger),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_repo),
            Arc::clone(&slug_service),
            Arc::clone(&ids),
            Arc::clone(&clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_repo),
            page_size,
        ));

        Self {
            article_commands,
            article_queries,
            token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<TokenManagerPort> {
        Arc::clone(&self.token_manager)
    }
}
