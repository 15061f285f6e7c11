use crate::{application::dto::JournalDto, domain::journal::journals};

pub fn list_journals() -> Vec<JournalDto> {
    journals().iter().map(JournalDto::from).collect()
}
