//! JWT claims carried by access and signup tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Claims embedded in every token this crate issues.
///
/// Only tokens with a non-empty `sub` and a future `exp` ever come out of
/// validation as a `Claims` value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the email address the token vouches for.
    pub sub: String,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Returns the subject claim.
    pub fn subject(&self) -> &str {
        &self.sub
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// Checks whether the token has expired at `now`. A token expiring at
    /// exactly `now` counts as expired.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.exp <= now.timestamp()
    }

    /// Returns the remaining TTL in seconds at `now` (0 if expired).
    pub fn remaining_ttl_seconds(&self, now: DateTime<Utc>) -> u64 {
        u64::try_from(self.exp - now.timestamp()).unwrap_or(0)
    }
}

/// Claims as they come off the wire, before the subject check.
///
/// `sub` is optional here so that a signed token without a subject decodes
/// far enough for its expiry to be checked first.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct WireClaims {
    #[serde(default)]
    pub sub: Option<String>,
    pub exp: i64,
}
