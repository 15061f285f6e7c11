// tests/support/mocks/security.rs
use ai_journal::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::TokenManager,
};
use ai_journal::domain::user::Role;
use async_trait::async_trait;
use chrono::Duration;

pub const ADMIN_TOKEN: &str = "admin-token";
pub const USER_TOKEN: &str = "user-token";
pub const SERVICE_TOKEN: &str = "service-token";
pub const EXPIRED_TOKEN: &str = "expired-token";

/// Maps the fixed tokens above to callers; everything else is rejected.
#[derive(Clone, Debug, Default)]
pub struct DummyTokenManager;

fn user(login: &str, role: Role) -> AuthenticatedUser {
    let now = super::time::fixed_now();
    AuthenticatedUser {
        login: login.into(),
        role,
        capabilities: role.default_capabilities(),
        issued_at: now,
        expires_at: now + Duration::hours(1),
    }
}

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, _subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        Err(ApplicationError::infrastructure("not implemented"))
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        match token {
            ADMIN_TOKEN => Ok(user("editor", Role::Admin)),
            USER_TOKEN => Ok(user("reader", Role::User)),
            SERVICE_TOKEN => Ok(user("importer", Role::Service)),
            EXPIRED_TOKEN => Err(ApplicationError::unauthorized("expired token")),
            _ => Err(ApplicationError::unauthorized("invalid token")),
        }
    }
}
