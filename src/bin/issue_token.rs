// src/bin/issue_token.rs
//! Issue a bearer token for local use: `issue_token <login> <role>`.
use ai_journal::application::{dto::TokenSubject, ports::security::TokenManager};
use ai_journal::config::AppConfig;
use ai_journal::domain::user::Role;
use ai_journal::infrastructure::security::BiscuitTokenManager;
use anyhow::{Context, Result, bail};

#[tokio::main]
async fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let (Some(login), Some(role)) = (args.next(), args.next()) else {
        bail!("usage: issue_token <login> <admin|user|service>");
    };
    let role: Role = role.parse().context("invalid role")?;

    let config = AppConfig::from_env()?;
    let manager = BiscuitTokenManager::new(config.biscuit_private_key(), config.token_ttl())?;
    let issued = manager.issue(TokenSubject { login, role }).await?;

    eprintln!("expires at {}", issued.expires_at.to_rfc3339());
    println!("{}", issued.token);
    Ok(())
}
