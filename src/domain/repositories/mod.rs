//! Repository trait definitions for the domain layer.
//!
//! The storage contract the shortener depends on. Implementations live in
//! `crate::infrastructure::persistence`; mock implementations are generated
//! via `mockall` for testing.
//!
//! # Available Repositories
//!
//! - [`LinkRepository`] - Short code → link storage
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod link_repository;

pub use link_repository::{LinkRepository, StorageError};

#[cfg(test)]
pub use link_repository::MockLinkRepository;
