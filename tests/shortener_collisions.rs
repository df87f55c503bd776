mod common;

use slink::application::services::{LinkService, ShortenError, ShortenerConfig};
use slink::domain::repositories::LinkRepository;
use slink::infrastructure::persistence::MemoryLinkRepository;
use slink::utils::code_generator::{fingerprint, salted};
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::Ordering;

#[tokio::test]
async fn test_first_candidate_taken_retries_with_salt() {
    let repo = Arc::new(common::TakenFirstRepository::new(1));
    let service = LinkService::new(repo.clone(), ShortenerConfig::default());

    let code = service.shorten("https://example.com").await.unwrap();

    assert_eq!(code, "f5f129");
    assert_ne!(code, "100680");
    assert_eq!(repo.checks.load(Ordering::SeqCst), 2);
    assert_eq!(
        repo.inner.get("f5f129").await.unwrap().as_deref(),
        Some("https://example.com")
    );
}

#[tokio::test]
async fn test_n_taken_candidates_resolve_on_attempt_n_plus_one() {
    let link = "https://rust-lang.org";

    for taken in 0..6 {
        let repo = Arc::new(common::TakenFirstRepository::new(taken));
        let service = LinkService::new(repo.clone(), ShortenerConfig::default());

        let code = service.shorten(link).await.unwrap();

        let mut expected_input = link.to_string();
        for _ in 0..taken {
            expected_input = salted("!", &expected_input);
        }

        assert_eq!(code, fingerprint(&expected_input, 6));
        assert_eq!(repo.checks.load(Ordering::SeqCst), taken + 1);
    }
}

#[tokio::test]
async fn test_retry_bound_is_enforced() {
    let repo = Arc::new(common::TakenFirstRepository::new(usize::MAX));
    let config = ShortenerConfig::new(6, "!", 5).unwrap();
    let service = LinkService::new(repo.clone(), config);

    let result = service.shorten("https://example.com").await;

    assert_eq!(result, Err(ShortenError::ExhaustedCodeSpace { attempts: 5 }));
    assert_eq!(repo.checks.load(Ordering::SeqCst), 5);
    assert!(repo.inner.is_empty());
}

#[tokio::test]
async fn test_custom_salt_is_used() {
    let repo = Arc::new(common::TakenFirstRepository::new(1));
    let config = ShortenerConfig::new(8, "~salt~", 4).unwrap();
    let service = LinkService::new(repo, config);

    let code = service.shorten("https://example.com").await.unwrap();

    assert_eq!(code, fingerprint("~salt~https://example.com", 8));
}

#[tokio::test]
async fn test_lookup_unknown_code() {
    let service = LinkService::new(
        Arc::new(MemoryLinkRepository::new()),
        ShortenerConfig::default(),
    );

    service.shorten("https://example.com").await.unwrap();

    assert_eq!(service.lookup("000000").await.unwrap(), None);
    assert_eq!(service.lookup("").await.unwrap(), None);
}

#[tokio::test]
async fn test_round_trip_many_links() {
    let service = LinkService::new(
        Arc::new(MemoryLinkRepository::new()),
        ShortenerConfig::default(),
    );

    let mut codes = HashSet::new();

    for i in 0..500 {
        let link = format!("https://example.com/article/{i}");
        let code = service.shorten(&link).await.unwrap();

        assert!(codes.insert(code.clone()));
        assert_eq!(service.lookup(&code).await.unwrap(), Some(link));
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_shorten_shared_repository() {
    let repo: Arc<dyn LinkRepository> = Arc::new(MemoryLinkRepository::new());
    let service = Arc::new(LinkService::new(repo, ShortenerConfig::default()));

    let handles: Vec<_> = (0..200)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move {
                let link = format!("https://example.com/{}", i % 50);
                service.shorten(&link).await
            })
        })
        .collect();

    let mut codes = HashSet::new();
    for handle in handles {
        let code = handle.await.unwrap().unwrap();
        assert!(codes.insert(code));
    }

    assert_eq!(codes.len(), 200);
}
