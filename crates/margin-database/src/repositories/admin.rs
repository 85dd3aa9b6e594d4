//! Admin repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use margin_core::error::{AppError, ErrorKind};
use margin_core::result::AppResult;
use margin_core::traits::SubjectLookup;
use margin_entity::admin::Admin;

/// Repository for admin lookups.
#[derive(Debug, Clone)]
pub struct AdminRepository {
    pool: PgPool,
}

impl AdminRepository {
    /// Create a new admin repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an admin by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<Admin>> {
        sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find admin by email", e)
            })
    }
}

#[async_trait]
impl SubjectLookup for AdminRepository {
    type Record = Admin;

    async fn get_by_subject(&self, subject: &str) -> AppResult<Option<Admin>> {
        self.find_by_email(subject).await
    }
}
