//! Token issuance and inspection commands.

use chrono::{Duration, Utc};
use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use margin_auth::{SignupTokenResolver, TokenIssuer, TokenValidator};
use margin_core::config::AppConfig;
use margin_core::error::AppError;

/// Arguments for token commands
#[derive(Debug, Args)]
pub struct TokenArgs {
    /// Token subcommand
    #[command(subcommand)]
    pub command: TokenCommand,
}

/// Token subcommands
#[derive(Debug, Subcommand)]
pub enum TokenCommand {
    /// Issue a signed token for an email address
    Issue {
        /// Email address the token vouches for
        subject: String,
        /// Lifetime in minutes (defaults to the configured lifetime)
        #[arg(long)]
        ttl_minutes: Option<u64>,
    },
    /// Validate an access token and print its claims
    Verify {
        /// The token to check
        token: String,
    },
    /// Extract the email carried by a signup token
    Signup {
        /// The signup token
        token: String,
    },
}

/// Execute token commands
pub fn execute(args: &TokenArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let signing = super::signing_config(config)?;

    match &args.command {
        TokenCommand::Issue {
            subject,
            ttl_minutes,
        } => {
            let lifetime = ttl_minutes.map(minutes_to_duration).transpose()?;
            let issued = TokenIssuer::new(signing).issue(subject, lifetime)?;

            output::print_record(
                &issued,
                &[
                    ("Token", issued.token.clone()),
                    ("Issued at", issued.issued_at.to_rfc3339()),
                    ("Expires at", issued.expires_at.to_rfc3339()),
                ],
                format,
            );
        }
        TokenCommand::Verify { token } => {
            let claims = TokenValidator::new(&signing).validate(token)?;
            let expires_at = claims
                .expires_at()
                .map(|t| t.to_rfc3339())
                .unwrap_or_else(|| claims.exp.to_string());

            output::print_record(
                &claims,
                &[
                    ("Subject", claims.sub.clone()),
                    ("Expires at", expires_at),
                    (
                        "Remaining",
                        format!("{}s", claims.remaining_ttl_seconds(Utc::now())),
                    ),
                ],
                format,
            );
        }
        TokenCommand::Signup { token } => {
            let email = SignupTokenResolver::new(TokenValidator::new(&signing))
                .extract_signup_subject(token)?;

            output::print_record(
                &serde_json::json!({ "email": email }),
                &[("Email", email.clone())],
                format,
            );
        }
    }

    Ok(())
}

fn minutes_to_duration(minutes: u64) -> Result<Duration, AppError> {
    i64::try_from(minutes)
        .ok()
        .and_then(Duration::try_minutes)
        .ok_or_else(|| AppError::validation(format!("Lifetime of {minutes} minutes is out of range")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_to_duration() {
        assert_eq!(minutes_to_duration(20).unwrap(), Duration::minutes(20));
        assert!(minutes_to_duration(u64::MAX).is_err());
    }
}
