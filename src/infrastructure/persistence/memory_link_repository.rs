//! In-memory implementation of link repository.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;

use crate::domain::repositories::{LinkRepository, StorageError};

/// Thread-safe in-memory store mapping short_code -> link.
///
/// Backed by a DashMap so reads are concurrent and lock-free for most cases.
/// Inserts go through the entry API, which holds the shard lock for the key
/// while checking and writing. Cloning shares the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryLinkRepository {
    inner: Arc<DashMap<String, String>>,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn get(&self, code: &str) -> Result<Option<String>, StorageError> {
        Ok(self.inner.get(code).map(|entry| entry.value().clone()))
    }

    async fn add(&self, code: &str, link: &str) -> Result<(), StorageError> {
        match self.inner.entry(code.to_string()) {
            Entry::Occupied(_) => Err(StorageError::DuplicateKey {
                code: code.to_string(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(link.to_string());
                Ok(())
            }
        }
    }

    async fn health_check(&self) -> bool {
        true
    }
}
