use std::collections::HashSet;

use crate::domain::article::entity::Article;
use crate::domain::user::value_objects::Capability;

/// Approved articles are visible to everyone; anything else only to callers
/// allowed to view every article.
pub struct CanViewArticleSpec<'a> {
    capabilities: Option<&'a HashSet<Capability>>,
    article: &'a Article,
}

impl<'a> CanViewArticleSpec<'a> {
    pub fn new(capabilities: Option<&'a HashSet<Capability>>, article: &'a Article) -> Self {
        Self {
            capabilities,
            article,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.article.is_public() || self.has_capability("articles", "view:any")
    }

    fn has_capability(&self, resource: &str, action: &str) -> bool {
        self.capabilities
            .is_some_and(|caps| caps.iter().any(|cap| cap.matches(resource, action)))
    }
}
