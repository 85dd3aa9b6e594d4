//! Extracts the claimed email from a signup or invitation token.

use chrono::{DateTime, Utc};

use margin_core::error::{AppError, ErrorKind};

use crate::jwt::TokenValidator;

/// Message for signup tokens that fail signature, format, or subject checks.
pub const INVALID_SIGNUP_TOKEN_MESSAGE: &str = "Invalid token";
/// Message for signup tokens whose expiry has passed.
pub const EXPIRED_SIGNUP_TOKEN_MESSAGE: &str = "Token expired";

/// Validates signup tokens without consulting storage.
///
/// The subject of a signup token usually has no account yet, so it is
/// returned as-is. Rejections keep their kind but carry signup-specific
/// messages, letting a caller offer "resend invite" rather than "log in".
#[derive(Debug, Clone)]
pub struct SignupTokenResolver {
    validator: TokenValidator,
}

impl SignupTokenResolver {
    /// Creates a resolver over the shared validator.
    pub fn new(validator: TokenValidator) -> Self {
        Self { validator }
    }

    /// Returns the email carried by a valid signup token.
    pub fn extract_signup_subject(&self, token: &str) -> Result<String, AppError> {
        self.extract_signup_subject_at(token, Utc::now())
    }

    /// Returns the email carried by `token` as if the current instant were `now`.
    pub fn extract_signup_subject_at(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<String, AppError> {
        self.validator
            .validate_at(token, now)
            .map(|claims| claims.sub)
            .map_err(into_signup_error)
    }
}

fn into_signup_error(err: AppError) -> AppError {
    let message = match err.kind {
        ErrorKind::ExpiredToken => EXPIRED_SIGNUP_TOKEN_MESSAGE,
        ErrorKind::InvalidToken => INVALID_SIGNUP_TOKEN_MESSAGE,
        _ => return err,
    };

    AppError {
        kind: err.kind,
        message: message.to_string(),
        source: err.source,
    }
}
