//! Resolve an access token against the admin table.

use std::sync::Arc;

use clap::Args;

use crate::output::{self, OutputFormat};
use margin_auth::{CurrentUserResolver, TokenValidator};
use margin_core::config::AppConfig;
use margin_core::error::AppError;
use margin_database::{AdminRepository, DatabasePool};

/// Arguments for the whoami command
#[derive(Debug, Args)]
pub struct WhoamiArgs {
    /// Access token to resolve
    pub token: String,
}

/// Execute the whoami command
pub async fn execute(
    args: &WhoamiArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let signing = super::signing_config(config)?;
    let pool = DatabasePool::connect(&config.database).await?;
    let repo = Arc::new(AdminRepository::new(pool.pool().clone()));

    let resolver = CurrentUserResolver::new(TokenValidator::new(&signing), repo);
    let admin = resolver.resolve_user(&args.token).await?;

    output::print_record(
        &admin,
        &[
            ("ID", admin.id.to_string()),
            ("Email", admin.email.clone()),
            ("Name", admin.name.clone()),
            ("Created at", admin.created_at.to_rfc3339()),
        ],
        format,
    );

    Ok(())
}
