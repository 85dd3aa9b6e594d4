//! Token signature, expiry, and subject validation.

use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{DecodingKey, Validation, decode};

use margin_core::error::AppError;

use super::claims::{Claims, WireClaims};
use super::signing::SigningConfig;

/// Message for tokens that fail signature, format, or subject checks.
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid jwt";
/// Message for validly signed tokens whose expiry has passed.
pub const EXPIRED_TOKEN_MESSAGE: &str = "jwt expired";

/// Decodes tokens and decides whether to accept them.
///
/// Checks run in a fixed order: signature and format first, then expiry,
/// then presence of a subject. A token is accepted only when all three pass.
#[derive(Clone)]
pub struct TokenValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenValidator")
            .field("algorithms", &self.validation.algorithms)
            .finish_non_exhaustive()
    }
}

impl TokenValidator {
    /// Creates a validator bound to the configured key and algorithm.
    pub fn new(signing: &SigningConfig) -> Self {
        let mut validation = Validation::new(signing.algorithm());
        // Expiry is checked by hand after decoding so that `exp == now` is
        // rejected and the ordering against the subject check is fixed.
        // The library reads `exp` as unsigned, so presence is left to
        // `WireClaims` where a negative timestamp still decodes.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.required_spec_claims.clear();

        Self {
            decoding_key: signing.decoding_key().clone(),
            validation,
        }
    }

    /// Validates `token` against the current time.
    pub fn validate(&self, token: &str) -> Result<Claims, AppError> {
        self.validate_at(token, Utc::now())
    }

    /// Validates `token` as if the current instant were `now`.
    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, AppError> {
        let wire = decode::<WireClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                tracing::debug!(reason = %e, "Rejected token");
                match e.kind() {
                    JwtErrorKind::ExpiredSignature => {
                        AppError::expired_token(EXPIRED_TOKEN_MESSAGE)
                    }
                    _ => AppError::invalid_token(INVALID_TOKEN_MESSAGE),
                }
            })?
            .claims;

        if wire.exp <= now.timestamp() {
            tracing::debug!(exp = wire.exp, "Rejected expired token");
            return Err(AppError::expired_token(EXPIRED_TOKEN_MESSAGE));
        }

        match wire.sub {
            Some(sub) if !sub.is_empty() => Ok(Claims { sub, exp: wire.exp }),
            _ => {
                tracing::debug!("Rejected token without subject");
                Err(AppError::invalid_token(INVALID_TOKEN_MESSAGE))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Duration;
    use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
    use margin_core::error::ErrorKind;
    use serde_json::json;

    use super::*;
    use crate::jwt::TokenIssuer;

    const SECRET: &[u8] = b"validator-test-secret";

    fn signing() -> SigningConfig {
        SigningConfig::new(SECRET, "HS256", Duration::minutes(15)).unwrap()
    }

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    fn craft(claims: serde_json::Value, secret: &[u8], alg: Algorithm) -> String {
        encode(&Header::new(alg), &claims, &EncodingKey::from_secret(secret)).unwrap()
    }

    #[test]
    fn test_round_trip() {
        let signing = signing();
        let issued = TokenIssuer::new(Arc::new(signing.clone()))
            .issue_at("xyz@gmail.com", Some(Duration::minutes(20)), now())
            .unwrap();

        let claims = TokenValidator::new(&signing)
            .validate_at(&issued.token, now())
            .unwrap();
        assert_eq!(claims.sub, "xyz@gmail.com");
        assert_eq!(claims.exp, now().timestamp() + 20 * 60);
    }

    #[test]
    fn test_expired_token() {
        let exp = (now() - Duration::minutes(25)).timestamp();
        let token = craft(json!({ "sub": "xyz@gmail.com", "exp": exp }), SECRET, Algorithm::HS256);

        let err = TokenValidator::new(&signing()).validate_at(&token, now()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::ExpiredToken);
        assert_eq!(err.message, EXPIRED_TOKEN_MESSAGE);
    }

    #[test]
    fn test_expiring_exactly_now_is_expired() {
        let token = craft(
            json!({ "sub": "xyz@gmail.com", "exp": now().timestamp() }),
            SECRET,
            Algorithm::HS256,
        );
        let err = TokenValidator::new(&signing()).validate_at(&token, now()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::ExpiredToken);
    }

    #[test]
    fn test_negative_exp_is_expired() {
        let token = craft(json!({ "sub": "xyz@gmail.com", "exp": -100 }), SECRET, Algorithm::HS256);

        let err = TokenValidator::new(&signing()).validate_at(&token, now()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::ExpiredToken);
        assert_eq!(err.message, EXPIRED_TOKEN_MESSAGE);
    }

    #[test]
    fn test_non_integer_exp_is_invalid() {
        let token = craft(json!({ "sub": "xyz@gmail.com", "exp": "tomorrow" }), SECRET, Algorithm::HS256);

        let err = TokenValidator::new(&signing()).validate_at(&token, now()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidToken);
    }

    #[test]
    fn test_missing_subject_is_invalid() {
        let exp = (now() + Duration::minutes(25)).timestamp();
        let token = craft(json!({ "exp": exp }), SECRET, Algorithm::HS256);

        let err = TokenValidator::new(&signing()).validate_at(&token, now()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidToken);
        assert_eq!(err.message, INVALID_TOKEN_MESSAGE);
    }

    #[test]
    fn test_empty_subject_is_invalid() {
        let exp = (now() + Duration::minutes(25)).timestamp();
        let token = craft(json!({ "sub": "", "exp": exp }), SECRET, Algorithm::HS256);

        let err = TokenValidator::new(&signing()).validate_at(&token, now()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidToken);
    }

    #[test]
    fn test_expiry_checked_before_subject() {
        let exp = (now() - Duration::minutes(25)).timestamp();
        let token = craft(json!({ "exp": exp }), SECRET, Algorithm::HS256);

        let err = TokenValidator::new(&signing()).validate_at(&token, now()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::ExpiredToken);
    }

    #[test]
    fn test_signature_checked_before_expiry() {
        let exp = (now() - Duration::minutes(25)).timestamp();
        let token = craft(
            json!({ "sub": "xyz@gmail.com", "exp": exp }),
            b"some-other-secret",
            Algorithm::HS256,
        );

        let err = TokenValidator::new(&signing()).validate_at(&token, now()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidToken);
    }

    #[test]
    fn test_missing_exp_is_invalid() {
        let token = craft(json!({ "sub": "xyz@gmail.com" }), SECRET, Algorithm::HS256);

        let err = TokenValidator::new(&signing()).validate_at(&token, now()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidToken);
    }

    #[test]
    fn test_other_algorithm_is_invalid() {
        let exp = (now() + Duration::minutes(25)).timestamp();
        let token = craft(json!({ "sub": "xyz@gmail.com", "exp": exp }), SECRET, Algorithm::HS512);

        let err = TokenValidator::new(&signing()).validate_at(&token, now()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidToken);
    }

    #[test]
    fn test_unsigned_token_is_invalid() {
        // {"alg":"none","typ":"JWT"} . {"sub":"xyz@gmail.com","exp":9999999999} . <empty>
        let token = "eyJhbGciOiJub25lIiwidHlwIjoiSldUIn0.\
                     eyJzdWIiOiJ4eXpAZ21haWwuY29tIiwiZXhwIjo5OTk5OTk5OTk5fQ.";

        let err = TokenValidator::new(&signing()).validate_at(token, now()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidToken);
    }

    #[test]
    fn test_malformed_token_is_invalid() {
        let validator = TokenValidator::new(&signing());
        for token in ["", "not-a-jwt", "a.b.c", "a.b"] {
            let err = validator.validate_at(token, now()).unwrap_err();
            assert_eq!(err.kind, ErrorKind::InvalidToken, "token {token:?}");
        }
    }
}
