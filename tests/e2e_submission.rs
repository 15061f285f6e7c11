use axum::http::{Method, StatusCode};
use serde_json::json;

mod support;

use support::{ADMIN_TOKEN, EXPIRED_TOKEN, SERVICE_TOKEN, USER_TOKEN, send, submission, submit};

#[tokio::test]
async fn submission_is_stored_as_pending() {
    let app = support::make_test_app();

    let article = submit(&app.router, "On Tides", 2).await;

    assert_eq!(article["status"], "pending");
    assert_eq!(article["journalId"], 2);
    assert_eq!(article["author"], "GPT-4");
    assert_eq!(article["prompt"], "Write an essay");
    assert!(article["publishedAt"].is_null());
    assert_eq!(article["createdAt"], article["updatedAt"]);
    let millis = support::fixed_now().timestamp_millis();
    assert_eq!(article["slug"], format!("on-tides-{millis}"));
}

#[tokio::test]
async fn prompt_is_optional() {
    let app = support::make_test_app();
    let (status, json) = send(
        &app.router,
        Method::POST,
        "/articles",
        Some(USER_TOKEN),
        Some(json!({ "title": "A", "author": "X", "content": "...", "journalId": 1 })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["prompt"], "");
    assert_eq!(json["status"], "pending");
}

#[tokio::test]
async fn missing_or_blank_fields_are_rejected() {
    let app = support::make_test_app();
    for field in ["title", "author", "content", "journalId"] {
        let mut body = submission("Missing", 1);
        body.as_object_mut().unwrap().remove(field);
        let (status, json) = send(
            &app.router,
            Method::POST,
            "/articles",
            Some(USER_TOKEN),
            Some(body),
        )
        .await;
        support::assert_error(status, &json, StatusCode::BAD_REQUEST);
    }

    let mut blank = submission("Blank", 1);
    blank["content"] = json!("   ");
    let (status, json) = send(
        &app.router,
        Method::POST,
        "/articles",
        Some(USER_TOKEN),
        Some(blank),
    )
    .await;
    support::assert_error(status, &json, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_journal_is_a_validation_error() {
    let app = support::make_test_app();
    for journal in [-1, 4, 99] {
        let (status, json) = send(
            &app.router,
            Method::POST,
            "/articles",
            Some(USER_TOKEN),
            Some(submission("Nowhere", journal)),
        )
        .await;
        support::assert_error(status, &json, StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn submission_requires_a_valid_token() {
    let app = support::make_test_app();
    for token in [None, Some(EXPIRED_TOKEN), Some("garbage")] {
        let (status, json) = send(
            &app.router,
            Method::POST,
            "/articles",
            token,
            Some(submission("Anon", 0)),
        )
        .await;
        support::assert_error(status, &json, StatusCode::UNAUTHORIZED);
    }
}

#[tokio::test]
async fn same_title_in_same_instant_gets_distinct_slugs() {
    let app = support::make_test_app();

    let first = submit(&app.router, "Same Title", 3).await;
    let second = submit(&app.router, "Same Title", 3).await;
    let other_journal = submit(&app.router, "Same Title", 1).await;

    assert_ne!(first["slug"], second["slug"]);
    assert_ne!(first["id"], second["id"]);
    assert_eq!(second["slug"], format!("{}-1", first["slug"].as_str().unwrap()));
    assert_eq!(other_journal["slug"], first["slug"]);
}

#[tokio::test]
async fn title_without_slug_characters_falls_back() {
    let app = support::make_test_app();
    let article = submit(&app.router, "???", 0).await;
    let millis = support::fixed_now().timestamp_millis();
    assert_eq!(article["slug"], format!("article-{millis}"));
}

#[tokio::test]
async fn service_can_insert_pre_approved_articles() {
    let app = support::make_test_app();
    let mut body = submission("Imported", 0);
    body["preApproved"] = json!(true);

    let (status, json) = send(
        &app.router,
        Method::POST,
        "/admin/articles",
        Some(SERVICE_TOKEN),
        Some(body),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED, "{json}");
    assert_eq!(json["status"], "approved");
    assert_eq!(json["publishedAt"], json["createdAt"]);

    let (status, page) = send(&app.router, Method::GET, "/journals/0", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["totalCount"], 1);
    assert_eq!(page["items"][0]["id"], json["id"]);
}

#[tokio::test]
async fn admin_create_without_pre_approval_queues_for_review() {
    let app = support::make_test_app();
    let (status, json) = send(
        &app.router,
        Method::POST,
        "/admin/articles",
        Some(ADMIN_TOKEN),
        Some(submission("Queued", 2)),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["status"], "pending");
}

#[tokio::test]
async fn regular_users_cannot_bypass_moderation() {
    let app = support::make_test_app();
    let mut body = submission("Sneaky", 1);
    body["preApproved"] = json!(true);

    let (status, json) = send(
        &app.router,
        Method::POST,
        "/admin/articles",
        Some(USER_TOKEN),
        Some(body),
    )
    .await;
    support::assert_error(status, &json, StatusCode::UNAUTHORIZED);

    let (_, page) = send(&app.router, Method::GET, "/journals/1", None, None).await;
    assert_eq!(page["totalCount"], 0);
}
