//! Shared state injected into every HTTP handler.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::repositories::LinkRepository;

/// Handler state; cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<dyn LinkRepository>>,
    pub link_repository: Arc<dyn LinkRepository>,
    /// Public prefix for generated short URLs.
    pub base_url: String,
}

impl AppState {
    pub fn new(
        link_service: Arc<LinkService<dyn LinkRepository>>,
        link_repository: Arc<dyn LinkRepository>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            link_service,
            link_repository,
            base_url: base_url.into(),
        }
    }
}
