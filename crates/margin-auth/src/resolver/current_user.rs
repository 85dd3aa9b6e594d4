//! Resolves an access token to the stored user it belongs to.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use margin_core::error::AppError;
use margin_core::traits::SubjectLookup;

use crate::jwt::TokenValidator;

/// Message returned when a valid token names an unknown subject.
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";

/// Validates access tokens and loads the user they vouch for.
pub struct CurrentUserResolver<L: SubjectLookup> {
    validator: TokenValidator,
    lookup: Arc<L>,
}

impl<L: SubjectLookup> std::fmt::Debug for CurrentUserResolver<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurrentUserResolver")
            .field("validator", &self.validator)
            .finish_non_exhaustive()
    }
}

impl<L: SubjectLookup> Clone for CurrentUserResolver<L> {
    fn clone(&self) -> Self {
        Self {
            validator: self.validator.clone(),
            lookup: Arc::clone(&self.lookup),
        }
    }
}

impl<L: SubjectLookup> CurrentUserResolver<L> {
    /// Creates a resolver over a validator and a subject lookup.
    pub fn new(validator: TokenValidator, lookup: Arc<L>) -> Self {
        Self { validator, lookup }
    }

    /// Resolves `token` to its user record.
    ///
    /// Token rejections are returned unchanged from the validator. The
    /// lookup runs exactly once, and only for an accepted token.
    pub async fn resolve_user(&self, token: &str) -> Result<L::Record, AppError> {
        self.resolve_user_at(token, Utc::now()).await
    }

    /// Resolves `token` as if the current instant were `now`.
    pub async fn resolve_user_at(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<L::Record, AppError> {
        let claims = self.validator.validate_at(token, now)?;

        match self.lookup.get_by_subject(claims.subject()).await? {
            Some(record) => Ok(record),
            None => {
                tracing::warn!(subject = %claims.sub, "Token subject has no matching user");
                Err(AppError::user_not_found(USER_NOT_FOUND_MESSAGE))
            }
        }
    }
}
