//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::LinkEntry;
use crate::domain::repositories::{LinkRepository, StorageError};
use crate::utils::db_error::is_unique_violation_on_code;

/// PostgreSQL repository for link storage and retrieval.
///
/// Uses SQLx prepared statements for SQL injection protection. Inserts rely
/// on `ON CONFLICT DO NOTHING` against the primary key, so the existence
/// check and the write are a single statement.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn map_sqlx_error(code: &str, e: sqlx::Error) -> StorageError {
    if is_unique_violation_on_code(&e) {
        return StorageError::DuplicateKey {
            code: code.to_string(),
        };
    }

    StorageError::Unavailable(e.to_string())
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn get(&self, code: &str) -> Result<Option<String>, StorageError> {
        let row = sqlx::query_as::<_, LinkEntry>("SELECT code, link FROM links WHERE code = $1")
            .bind(code)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(|e| map_sqlx_error(code, e))?;

        Ok(row.map(|entry| entry.link))
    }

    async fn add(&self, code: &str, link: &str) -> Result<(), StorageError> {
        let result = sqlx::query(
            r#"
            INSERT INTO links (code, link)
            VALUES ($1, $2)
            ON CONFLICT (code) DO NOTHING
            "#,
        )
        .bind(code)
        .bind(link)
        .execute(self.pool.as_ref())
        .await
        .map_err(|e| map_sqlx_error(code, e))?;

        if result.rows_affected() == 0 {
            return Err(StorageError::DuplicateKey {
                code: code.to_string(),
            });
        }

        Ok(())
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_pool_timeout_to_unavailable() {
        let err = map_sqlx_error("abc123", sqlx::Error::PoolTimedOut);
        assert!(matches!(err, StorageError::Unavailable(_)));
    }
}
