// src/infrastructure/security/claims.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::Role;
use biscuit_auth::builder::{Fact, Predicate, Term};
use chrono::{DateTime, Utc};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

pub fn parse_claims(facts: Vec<Fact>) -> ApplicationResult<AuthenticatedUser> {
    let mut ctx = ClaimsContext::default();
    for fact in facts {
        ctx.apply_predicate(&fact.predicate);
    }
    ctx.into_user()
}

#[derive(Default)]
struct ClaimsContext {
    login: Option<String>,
    role: Option<Role>,
    issued_at: Option<SystemTime>,
    expires_at: Option<SystemTime>,
}

impl ClaimsContext {
    fn apply_predicate(&mut self, predicate: &Predicate) {
        let Some(first) = predicate.terms.first() else {
            return;
        };
        match (predicate.name.as_str(), first) {
            ("user", Term::Str(login)) => self.login = Some(login.clone()),
            ("role", Term::Str(role)) => self.role = role.parse().ok(),
            ("issued_at", Term::Date(seconds)) => self.issued_at = Some(from_unix(*seconds)),
            ("expires_at", Term::Date(seconds)) => self.expires_at = Some(from_unix(*seconds)),
            _ => {}
        }
    }

    fn into_user(self) -> ApplicationResult<AuthenticatedUser> {
        let login = self
            .login
            .ok_or_else(|| ApplicationError::unauthorized("missing user"))?;
        let role = self
            .role
            .ok_or_else(|| ApplicationError::unauthorized("missing or unknown role"))?;
        let issued_at = self
            .issued_at
            .ok_or_else(|| ApplicationError::unauthorized("missing issued_at"))?;
        let expires_at = self
            .expires_at
            .ok_or_else(|| ApplicationError::unauthorized("missing expires_at"))?;

        Ok(AuthenticatedUser {
            login,
            role,
            capabilities: role.default_capabilities(),
            issued_at: DateTime::<Utc>::from(issued_at),
            expires_at: DateTime::<Utc>::from(expires_at),
        })
    }
}

fn from_unix(seconds: u64) -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(seconds)
}
