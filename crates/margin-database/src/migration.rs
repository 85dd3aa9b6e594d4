//! Schema setup for the admin store.

use sqlx::PgPool;

use margin_core::error::{AppError, ErrorKind};

/// Brings the `admins` table and its case-insensitive email index up to date.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    let migrator = sqlx::migrate!("./migrations");
    let known = migrator.iter().count();

    migrator.run(pool).await.map_err(|e| {
        AppError::with_source(ErrorKind::Database, "Admin schema migration failed", e)
    })?;

    tracing::info!(migrations = known, "Admin schema is current");
    Ok(())
}
