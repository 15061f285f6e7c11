// src/application/ports/mod.rs
pub mod security;
pub mod time;
pub mod util;

pub type TokenManagerPort = dyn security::TokenManager;
pub type ClockPort = dyn time::Clock;
pub type SlugGeneratorPort = dyn util::SlugGenerator;
pub type IdGeneratorPort = dyn util::IdGenerator;
