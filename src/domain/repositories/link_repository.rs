//! Repository trait for short code → link storage.

use async_trait::async_trait;

/// Errors raised by a [`LinkRepository`] backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The code is already present; the insert did not happen.
    #[error("short code '{code}' already exists")]
    DuplicateKey { code: String },

    /// The backing store could not be reached or written.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Storage contract for short links.
///
/// Backends must be safe to call concurrently from many tasks. Entries are
/// write-once: a code, once added, keeps mapping to the same link.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - In-process concurrent map
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Looks up the link stored under `code` (exact match).
    ///
    /// # Returns
    ///
    /// - `Ok(Some(link))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] if the store cannot be queried.
    async fn get(&self, code: &str) -> Result<Option<String>, StorageError>;

    /// Inserts `code → link` if and only if `code` is absent.
    ///
    /// The check and the insert happen atomically, so two concurrent callers
    /// adding the same code cannot both succeed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::DuplicateKey`] if `code` is already stored.
    /// Returns [`StorageError::Unavailable`] if the store cannot be written.
    async fn add(&self, code: &str, link: &str) -> Result<(), StorageError>;

    /// Reports whether the backend answers queries.
    ///
    /// The default probes with a lookup of the empty code.
    async fn health_check(&self) -> bool {
        self.get("").await.is_ok()
    }
}
