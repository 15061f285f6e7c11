// tests/support/mocks/util.rs
use ai_journal::application::ports::util::IdGenerator;
use std::sync::atomic::{AtomicU64, Ordering};

/// Predictable ids: `article-1`, `article-2`, ...
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        format!("article-{n}")
    }
}
