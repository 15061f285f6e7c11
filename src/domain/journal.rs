// src/domain/journal.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one of the fixed sub-journals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct JournalId(u8);

impl JournalId {
    pub fn new(id: i64) -> DomainResult<Self> {
        u8::try_from(id)
            .ok()
            .filter(|value| usize::from(*value) < JOURNALS.len())
            .map(Self)
            .ok_or_else(|| {
                DomainError::Validation(format!(
                    "journal id must be between 0 and {}",
                    JOURNALS.len() - 1
                ))
            })
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn journal(self) -> &'static Journal {
        &JOURNALS[usize::from(self.0)]
    }
}

impl TryFrom<i64> for JournalId {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<JournalId> for i64 {
    fn from(value: JournalId) -> Self {
        i64::from(value.0)
    }
}

impl From<JournalId> for i16 {
    fn from(value: JournalId) -> Self {
        i16::from(value.0)
    }
}

impl fmt::Display for JournalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Journal {
    pub id: JournalId,
    pub name: &'static str,
}

static JOURNALS: [Journal; 4] = [
    Journal {
        id: JournalId(0),
        name: "Literature, History & Philosophy",
    },
    Journal {
        id: JournalId(1),
        name: "Social Sciences",
    },
    Journal {
        id: JournalId(2),
        name: "Natural Sciences",
    },
    Journal {
        id: JournalId(3),
        name: "Mathematics",
    },
];

pub fn journals() -> &'static [Journal] {
    &JOURNALS
}
