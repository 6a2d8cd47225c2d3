//! Database access layer implementing the repository pattern.
//!
//! The repository layer translates between domain models and the
//! `customers` table. All database operations go through it; handlers
//! never issue SQL directly.

use std::sync::Arc;

use sqlx::PgPool;

pub mod customers;

use crate::error::Result;

/// Container for repository instances providing unified database access.
///
/// Injected into route handlers as shared state at router construction,
/// so tests can substitute their own pool.
#[derive(Clone)]
pub struct Storage {
    /// Repository for customer rows.
    pub customers: Arc<customers::Repository>,

    pool: Arc<PgPool>,
}

impl Storage {
    /// Creates a new storage instance over the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        let pool = Arc::new(pool);
        Self { customers: Arc::new(customers::Repository::new(pool.clone())), pool }
    }

    /// Returns the shared connection pool.
    pub fn pool(&self) -> Arc<PgPool> {
        self.pool.clone()
    }

    /// Lightweight connectivity probe for health checks.
    ///
    /// # Errors
    ///
    /// Returns error if the database is unreachable.
    pub async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&*self.pool).await?;
        Ok(())
    }

    /// Creates the `customers` table if it does not exist.
    ///
    /// Shared by the server binary at startup and by the test
    /// environment. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns error if the DDL statement fails.
    pub async fn run_migrations(pool: &PgPool) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS customers (
                id          BIGSERIAL PRIMARY KEY,
                first_name  TEXT NOT NULL,
                last_name   TEXT NOT NULL,
                city        TEXT NOT NULL
            )
            ",
        )
        .execute(pool)
        .await?;

        Ok(())
    }
}
