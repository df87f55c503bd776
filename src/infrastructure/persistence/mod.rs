//! Link repository implementations.
//!
//! # Repositories
//!
//! - [`MemoryLinkRepository`] - Concurrent in-process map, lost on restart
//! - [`PgLinkRepository`] - PostgreSQL table keyed by short code
//!
//! [`pg_pool`] builds the connection pool and applies migrations.

pub mod memory_link_repository;
pub mod pg_link_repository;
pub mod pg_pool;

pub use memory_link_repository::MemoryLinkRepository;
pub use pg_link_repository::PgLinkRepository;
