//! Database migration command.

use crate::output;
use margin_core::config::AppConfig;
use margin_core::error::AppError;
use margin_database::DatabasePool;

/// Apply pending migrations
pub async fn execute(config: &AppConfig) -> Result<(), AppError> {
    let pool = DatabasePool::connect(&config.database).await?;
    pool.health_check().await?;

    margin_database::migration::run_migrations(pool.pool()).await?;
    output::print_success("All migrations applied successfully.");

    Ok(())
}
