//! Configuration checks.

use clap::{Args, Subcommand};

use crate::output;
use margin_core::config::AppConfig;
use margin_core::error::AppError;
use margin_database::connection::redact_url;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Check that the configuration yields a usable signing setup
    Validate,
}

/// Execute config commands
pub fn execute(args: &ConfigArgs, config: &AppConfig) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Validate => {
            let signing = super::signing_config(config)?;

            output::print_success("Configuration is valid");
            output::print_kv("Algorithm", &format!("{:?}", signing.algorithm()));
            output::print_kv(
                "Default lifetime",
                &format!("{} min", signing.default_lifetime().num_minutes()),
            );
            output::print_kv("Database", &redact_url(&config.database.url));
            output::print_kv("Log level", &config.logging.level);
        }
    }

    Ok(())
}
