// tests/support/helpers.rs
use super::mocks::{DummyTokenManager, InMemoryArticleRepository, SequentialIds, TestClock};
use ai_journal::application::{ports::time::Clock, services::ApplicationServices};
use ai_journal::domain::article::ArticleRepository;
use ai_journal::infrastructure::util::DefaultSlugGenerator;
use ai_journal::presentation::http::{routes::build_router, state::HttpState};
use axum::{
    Router,
    body::{self, Body},
    http::{Method, Request, StatusCode, header},
};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub const PAGE_SIZE: u32 = 5;

pub struct TestApp {
    pub router: Router,
    pub clock: Arc<TestClock>,
}

pub fn build_services(
    repo: Arc<dyn ArticleRepository>,
    clock: Arc<TestClock>,
) -> Arc<ApplicationServices> {
    let clock: Arc<dyn Clock> = clock;
    Arc::new(ApplicationServices::new(
        repo,
        Arc::new(DummyTokenManager),
        clock,
        Arc::new(DefaultSlugGenerator),
        Arc::new(SequentialIds::default()),
        PAGE_SIZE,
    ))
}

pub fn make_test_app_with_repo(repo: Arc<dyn ArticleRepository>) -> TestApp {
    let clock = Arc::new(TestClock::default());
    let state = HttpState {
        services: build_services(repo, Arc::clone(&clock)),
        allowed_origins: vec!["http://localhost:3000".into()],
    };
    TestApp {
        router: build_router(state),
        clock,
    }
}

pub fn make_test_app() -> TestApp {
    make_test_app_with_repo(Arc::new(InMemoryArticleRepository::default()))
}

pub fn make_test_router() -> Router {
    make_test_app().router
}

/// Send a request and decode the JSON body (`Value::Null` when empty).
pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub fn submission(title: &str, journal_id: i64) -> Value {
    serde_json::json!({
        "title": title,
        "author": "GPT-4",
        "content": "Generated body.",
        "prompt": "Write an essay",
        "journalId": journal_id,
    })
}

/// Submit as a regular user and return the stored record.
pub async fn submit(router: &Router, title: &str, journal_id: i64) -> Value {
    let (status, json) = send(
        router,
        Method::POST,
        "/articles",
        Some(super::USER_TOKEN),
        Some(submission(title, journal_id)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{json}");
    json
}

/// Move an article to `status` as an admin and return the updated record.
pub async fn moderate(router: &Router, id: &str, status: &str) -> Value {
    let (code, json) = send(
        router,
        Method::PATCH,
        "/admin/articles",
        Some(super::ADMIN_TOKEN),
        Some(serde_json::json!({ "id": id, "status": status })),
    )
    .await;
    assert_eq!(code, StatusCode::OK, "{json}");
    json
}

/// Assert the `{error, message}` error shape with the expected status.
pub fn assert_error(status: StatusCode, json: &Value, expected: StatusCode) {
    assert_eq!(status, expected, "{json}");
    assert_eq!(
        json["error"].as_str(),
        expected.canonical_reason(),
        "unexpected error field: {json}"
    );
    assert!(
        json["message"].as_str().is_some_and(|m| !m.is_empty()),
        "expected non-empty message: {json}"
    );
}
