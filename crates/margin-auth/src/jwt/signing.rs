//! Process-wide signing configuration.

use std::str::FromStr;

use chrono::Duration;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey};

use margin_core::config::AuthConfig;
use margin_core::error::AppError;

/// Validated key material, algorithm, and default token lifetime.
///
/// Built once at startup and shared read-only by the issuer and the
/// validator. Only the HMAC family is accepted; anything else, including
/// `none`, is a fatal misconfiguration.
#[derive(Clone)]
pub struct SigningConfig {
    algorithm: Algorithm,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    default_lifetime: Duration,
}

impl std::fmt::Debug for SigningConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningConfig")
            .field("algorithm", &self.algorithm)
            .field("default_lifetime", &self.default_lifetime)
            .finish_non_exhaustive()
    }
}

impl SigningConfig {
    /// Creates a signing configuration from raw parts.
    pub fn new(
        secret: &[u8],
        algorithm: &str,
        default_lifetime: Duration,
    ) -> Result<Self, AppError> {
        if secret.is_empty() {
            return Err(AppError::configuration("Signing secret must not be empty"));
        }

        let algorithm = parse_algorithm(algorithm)?;

        if default_lifetime < Duration::seconds(1) {
            return Err(AppError::configuration(
                "Default token lifetime must be at least one second",
            ));
        }

        Ok(Self {
            algorithm,
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            default_lifetime,
        })
    }

    /// Creates a signing configuration from the `[auth]` config section.
    pub fn from_auth_config(config: &AuthConfig) -> Result<Self, AppError> {
        let lifetime = i64::try_from(config.access_token_expire_minutes)
            .ok()
            .and_then(Duration::try_minutes)
            .ok_or_else(|| {
                AppError::configuration(format!(
                    "Token lifetime of {} minutes is out of range",
                    config.access_token_expire_minutes
                ))
            })?;

        Self::new(config.secret_key.as_bytes(), &config.algorithm, lifetime)
    }

    /// The signing algorithm.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Lifetime applied when a caller does not request one.
    pub fn default_lifetime(&self) -> Duration {
        self.default_lifetime
    }

    pub(crate) fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }

    pub(crate) fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }
}

fn parse_algorithm(name: &str) -> Result<Algorithm, AppError> {
    let name = name.trim().to_ascii_uppercase();
    if name == "NONE" {
        return Err(AppError::configuration(
            "Unsigned tokens (alg=none) are not supported",
        ));
    }

    let algorithm = Algorithm::from_str(&name).map_err(|_| {
        AppError::configuration(format!("Unknown signing algorithm '{name}'"))
    })?;

    match algorithm {
        Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => Ok(algorithm),
        other => Err(AppError::configuration(format!(
            "Signing algorithm {other:?} is not a symmetric HMAC algorithm"
        ))),
    }
}
