use crate::application::ports::util::{IdGenerator, SlugGenerator};
use slug::slugify;
use uuid::Uuid;

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

#[derive(Default, Clone)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_are_url_safe() {
        let slug = DefaultSlugGenerator.slugify("Hello,  World! 2024");
        assert_eq!(slug, "hello-world-2024");
    }

    #[test]
    fn ids_are_unique_uuids() {
        let a = UuidGenerator.next_id();
        let b = UuidGenerator.next_id();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a).is_ok());
    }
}
