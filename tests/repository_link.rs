mod common;

use slink::application::services::{LinkService, ShortenerConfig};
use slink::domain::repositories::{LinkRepository, StorageError};
use slink::infrastructure::persistence::PgLinkRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
#[ignore = "requires DATABASE_URL pointing at a PostgreSQL server"]
async fn test_add_and_get(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    repo.add("abc123", "https://example.com").await.unwrap();

    let link = repo.get("abc123").await.unwrap();
    assert_eq!(link.as_deref(), Some("https://example.com"));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL pointing at a PostgreSQL server"]
async fn test_get_not_found(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    assert_eq!(repo.get("nonexistent").await.unwrap(), None);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL pointing at a PostgreSQL server"]
async fn test_add_duplicate_code(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    repo.add("dup123", "https://first.com").await.unwrap();
    let result = repo.add("dup123", "https://second.com").await;

    assert_eq!(
        result,
        Err(StorageError::DuplicateKey {
            code: "dup123".to_string()
        })
    );
    assert_eq!(
        repo.get("dup123").await.unwrap().as_deref(),
        Some("https://first.com")
    );
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL pointing at a PostgreSQL server"]
async fn test_health_check(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    assert!(repo.health_check().await);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL pointing at a PostgreSQL server"]
async fn test_service_round_trip(pool: PgPool) {
    let repo = Arc::new(PgLinkRepository::new(Arc::new(pool)));
    let service = LinkService::new(repo, ShortenerConfig::default());

    let first = service.shorten("https://example.com").await.unwrap();
    let second = service.shorten("https://example.com").await.unwrap();

    assert_eq!(first, "100680");
    assert_eq!(second, "f5f129");
    assert_eq!(
        service.lookup(&second).await.unwrap().as_deref(),
        Some("https://example.com")
    );
}
