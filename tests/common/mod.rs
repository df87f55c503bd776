#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use slink::api::routes::public_routes;
use slink::application::services::{LinkService, ShortenerConfig};
use slink::domain::repositories::{LinkRepository, StorageError};
use slink::infrastructure::persistence::MemoryLinkRepository;
use slink::state::AppState;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const BASE_URL: &str = "http://localhost:3000";

pub fn create_test_state() -> AppState {
    create_state_with(
        Arc::new(MemoryLinkRepository::new()),
        ShortenerConfig::default(),
    )
}

pub fn create_state_with(repository: Arc<dyn LinkRepository>, config: ShortenerConfig) -> AppState {
    let link_service = Arc::new(LinkService::new(repository.clone(), config));
    AppState::new(link_service, repository, BASE_URL)
}

pub fn create_test_app(state: AppState) -> Router {
    public_routes().with_state(state)
}

/// Storage that reports the first `taken` candidates as already used.
pub struct TakenFirstRepository {
    remaining: AtomicUsize,
    pub checks: AtomicUsize,
    pub inner: MemoryLinkRepository,
}

impl TakenFirstRepository {
    pub fn new(taken: usize) -> Self {
        Self {
            remaining: AtomicUsize::new(taken),
            checks: AtomicUsize::new(0),
            inner: MemoryLinkRepository::new(),
        }
    }
}

#[async_trait]
impl LinkRepository for TakenFirstRepository {
    async fn get(&self, code: &str) -> Result<Option<String>, StorageError> {
        self.checks.fetch_add(1, Ordering::SeqCst);

        let taken = self
            .remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();

        if taken {
            return Ok(Some("https://someone-else.com".to_string()));
        }

        self.inner.get(code).await
    }

    async fn add(&self, code: &str, link: &str) -> Result<(), StorageError> {
        self.inner.add(code, link).await
    }
}

/// Storage whose backend is down.
pub struct UnavailableRepository;

#[async_trait]
impl LinkRepository for UnavailableRepository {
    async fn get(&self, _code: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("connection refused".to_string()))
    }

    async fn add(&self, _code: &str, _link: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("connection refused".to_string()))
    }
}
