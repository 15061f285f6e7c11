use ai_journal::application::{
    commands::articles::{SetArticleStatusCommand, SubmitArticleCommand},
    dto::AuthenticatedUser,
    error::ApplicationError,
    queries::articles::{GetArticleQuery, ListJournalPageQuery},
};
use ai_journal::domain::{article::ArticleStatus, user::Role};
use ai_journal::infrastructure::repositories::JsonFileArticleRepository;
use chrono::Duration;
use std::collections::HashSet;
use std::sync::Arc;

mod support;

use support::{InMemoryArticleRepository, TestClock, build_services, fixed_now};

fn caller(role: Role) -> AuthenticatedUser {
    AuthenticatedUser {
        login: role.as_str().into(),
        role,
        capabilities: role.default_capabilities(),
        issued_at: fixed_now(),
        expires_at: fixed_now() + Duration::hours(1),
    }
}

fn command(title: &str, journal_id: i64) -> SubmitArticleCommand {
    SubmitArticleCommand::builder()
        .title(title)
        .author("X")
        .content("text")
        .journal_id(journal_id)
        .build()
}

#[tokio::test]
async fn submitted_article_is_persisted_pending() {
    let repo = Arc::new(InMemoryArticleRepository::default());
    let services = build_services(repo.clone(), Arc::new(TestClock::default()));

    let dto = services
        .article_commands
        .submit_article(&caller(Role::User), command("Queued", 1))
        .await
        .unwrap();

    let stored = repo.snapshot().await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id.as_str(), dto.id);
    assert_eq!(stored[0].status, ArticleStatus::Pending);
    assert_eq!(stored[0].created_at, fixed_now());
}

#[tokio::test]
async fn service_role_cannot_submit_through_public_path() {
    let services = build_services(
        Arc::new(InMemoryArticleRepository::default()),
        Arc::new(TestClock::default()),
    );
    let result = services
        .article_commands
        .submit_article(&caller(Role::Service), command("Nope", 0))
        .await;
    assert!(matches!(result, Err(ApplicationError::Unauthorized(_))));
}

#[tokio::test]
async fn moderation_requires_capability_before_lookup() {
    let services = build_services(
        Arc::new(InMemoryArticleRepository::default()),
        Arc::new(TestClock::default()),
    );
    let result = services
        .article_commands
        .set_article_status(
            &caller(Role::User),
            SetArticleStatusCommand {
                id: "missing".into(),
                status: "approved".into(),
            },
        )
        .await;
    assert!(matches!(result, Err(ApplicationError::Unauthorized(_))));
}

#[tokio::test]
async fn page_beyond_total_is_not_found() {
    let clock = Arc::new(TestClock::default());
    let services = build_services(Arc::new(InMemoryArticleRepository::default()), clock);
    let admin = caller(Role::Admin);

    for n in 0..5 {
        services
            .article_commands
            .create_article(&admin, command(&format!("A{n}"), 0), true)
            .await
            .unwrap();
    }

    let page = services
        .article_queries
        .list_journal_page(ListJournalPageQuery {
            journal_id: 0,
            page: 1,
        })
        .await
        .unwrap();
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.items.len(), 5);

    let result = services
        .article_queries
        .list_journal_page(ListJournalPageQuery {
            journal_id: 0,
            page: 2,
        })
        .await;
    assert!(matches!(result, Err(ApplicationError::NotFound(_))));
}

#[tokio::test]
async fn hidden_articles_look_missing_to_the_public() {
    let services = build_services(
        Arc::new(InMemoryArticleRepository::default()),
        Arc::new(TestClock::default()),
    );
    let dto = services
        .article_commands
        .submit_article(&caller(Role::User), command("Hidden", 2))
        .await
        .unwrap();

    let anonymous = services
        .article_queries
        .get_article(
            None,
            GetArticleQuery {
                journal_id: 2,
                identifier: dto.slug.clone(),
            },
        )
        .await;
    assert!(matches!(anonymous, Err(ApplicationError::NotFound(_))));

    let admin = caller(Role::Admin);
    let visible = services
        .article_queries
        .get_article(
            Some(&admin),
            GetArticleQuery {
                journal_id: 2,
                identifier: dto.id.clone(),
            },
        )
        .await
        .unwrap();
    assert_eq!(visible.slug, dto.slug);
}

#[tokio::test]
async fn concurrent_same_title_submissions_get_distinct_slugs() {
    let dir = tempfile::tempdir().unwrap();
    let repo = Arc::new(JsonFileArticleRepository::new(dir.path()));
    let services = build_services(repo.clone(), Arc::new(TestClock::default()));

    let tasks: Vec<_> = (0..4)
        .map(|_| {
            let services = Arc::clone(&services);
            tokio::spawn(async move {
                services
                    .article_commands
                    .submit_article(&caller(Role::User), command("Same", 1))
                    .await
            })
        })
        .collect();

    let mut slugs = HashSet::new();
    for task in tasks {
        let dto = task.await.unwrap().unwrap();
        assert!(dto.slug.starts_with("same-1714564800000"), "{}", dto.slug);
        slugs.insert(dto.slug);
    }
    assert_eq!(slugs.len(), 4);

    for slug in &slugs {
        let found = services
            .article_queries
            .get_article(
                Some(&caller(Role::Admin)),
                GetArticleQuery {
                    journal_id: 1,
                    identifier: slug.clone(),
                },
            )
            .await
            .unwrap();
        assert_eq!(&found.slug, slug);
    }
}
