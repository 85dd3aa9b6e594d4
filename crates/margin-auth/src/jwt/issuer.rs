//! Token issuance with configurable lifetime.

use std::sync::Arc;

use chrono::{DateTime, Duration, Timelike, Utc};
use jsonwebtoken::{Header, encode};
use serde::{Deserialize, Serialize};

use margin_core::error::{AppError, ErrorKind};

use super::claims::Claims;
use super::signing::SigningConfig;

/// Creates signed tokens for a subject.
#[derive(Debug, Clone)]
pub struct TokenIssuer {
    signing: Arc<SigningConfig>,
}

/// A freshly signed token together with the instants it was cut for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedToken {
    /// The compact, signed token string. Opaque to callers.
    pub token: String,
    /// When the token was issued.
    pub issued_at: DateTime<Utc>,
    /// Expiry, truncated to whole seconds to match the `exp` claim.
    pub expires_at: DateTime<Utc>,
}

impl TokenIssuer {
    /// Creates a new issuer over the shared signing configuration.
    pub fn new(signing: Arc<SigningConfig>) -> Self {
        Self { signing }
    }

    /// Issues a token for `subject`, valid for `lifetime` or the configured
    /// default when `None`.
    pub fn issue(
        &self,
        subject: &str,
        lifetime: Option<Duration>,
    ) -> Result<IssuedToken, AppError> {
        self.issue_at(subject, lifetime, Utc::now())
    }

    /// Issues a token as if the current instant were `now`.
    pub fn issue_at(
        &self,
        subject: &str,
        lifetime: Option<Duration>,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, AppError> {
        if subject.trim().is_empty() {
            return Err(AppError::validation("Token subject must not be empty"));
        }

        let lifetime = lifetime.unwrap_or_else(|| self.signing.default_lifetime());
        // Shorter lifetimes could truncate to an expiry at or before `now`.
        if lifetime < Duration::seconds(1) {
            return Err(AppError::validation("Token lifetime must be at least one second"));
        }

        let expires_at = now
            .checked_add_signed(lifetime)
            .and_then(|t| t.with_nanosecond(0))
            .ok_or_else(|| AppError::validation("Token lifetime is out of range"))?;

        let claims = Claims {
            sub: subject.to_string(),
            exp: expires_at.timestamp(),
        };

        let token = encode(
            &Header::new(self.signing.algorithm()),
            &claims,
            self.signing.encoding_key(),
        )
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Failed to sign token: {e}"),
                e,
            )
        })?;

        tracing::debug!(exp = claims.exp, "Issued token");

        Ok(IssuedToken {
            token,
            issued_at: now,
            expires_at,
        })
    }
}
