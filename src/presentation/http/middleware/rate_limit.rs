// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::sync::OnceLock;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

pub type SubmissionRateLimit = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Per-client limit on article submissions: a sustained one request every
/// two seconds with bursts of five.
///
/// Keys come from forwarding headers or the peer address, so the server must
/// be started with connect info.
pub fn submission_rate_limit() -> Option<SubmissionRateLimit> {
    static RATE_LIMITER: OnceLock<Option<SubmissionRateLimit>> = OnceLock::new();

    RATE_LIMITER
        .get_or_init(|| {
            let mut builder = GovernorConfigBuilder::default();
            builder.per_second(2);
            builder.burst_size(5);
            let config = builder.key_extractor(SmartIpKeyExtractor).finish();
            if config.is_none() {
                tracing::warn!("invalid rate limit configuration, submissions are unthrottled");
            }
            config.map(GovernorLayer::new)
        })
        .clone()
}
