//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Token signing configuration as read from the environment.
///
/// These are raw values. The auth crate turns them into a validated
/// signing handle once at startup and refuses to run if they are unusable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Shared secret for HMAC token signing.
    #[serde(default = "default_secret_key")]
    pub secret_key: String,
    /// Signing algorithm identifier (`HS256`, `HS384` or `HS512`).
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
    /// Lifetime of a token issued without an explicit expiry, in minutes.
    #[serde(default = "default_expire_minutes")]
    pub access_token_expire_minutes: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret_key: default_secret_key(),
            algorithm: default_algorithm(),
            access_token_expire_minutes: default_expire_minutes(),
        }
    }
}

fn default_secret_key() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_algorithm() -> String {
    "HS256".to_string()
}

fn default_expire_minutes() -> u64 {
    15
}
