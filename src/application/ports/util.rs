// src/application/ports/util.rs
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}

pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}
