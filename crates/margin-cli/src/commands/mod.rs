//! CLI command definitions and dispatch.

pub mod config;
pub mod migrate;
pub mod token;
pub mod whoami;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use margin_auth::SigningConfig;
use margin_core::config::AppConfig;
use margin_core::error::AppError;

/// Margin: issue and check authentication tokens
#[derive(Debug, Parser)]
#[command(name = "margin", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Issue and inspect tokens
    Token(token::TokenArgs),
    /// Resolve an access token to the stored admin
    Whoami(whoami::WhoamiArgs),
    /// Run database migrations
    Migrate,
    /// Configuration checks
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Token(args) => token::execute(args, config, self.format),
            Commands::Whoami(args) => whoami::execute(args, config, self.format).await,
            Commands::Migrate => migrate::execute(config).await,
            Commands::Config(args) => config::execute(args, config),
        }
    }
}

/// Helper: build the shared signing configuration, failing on misconfiguration
pub fn signing_config(config: &AppConfig) -> Result<Arc<SigningConfig>, AppError> {
    SigningConfig::from_auth_config(&config.auth).map(Arc::new)
}
