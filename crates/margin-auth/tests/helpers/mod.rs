//! Shared test helpers for token flow tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use uuid::Uuid;

use margin_auth::{
    CurrentUserResolver, SignupTokenResolver, SigningConfig, TokenIssuer, TokenValidator,
};
use margin_core::error::{AppError, ErrorKind};
use margin_core::traits::SubjectLookup;
use margin_entity::admin::Admin;

/// Secret shared by every token in the test suite.
pub const SECRET: &str = "test-secret-key";

/// In-memory admin store that records every lookup it serves.
#[derive(Debug, Default)]
pub struct MemoryAdminLookup {
    admins: HashMap<String, Admin>,
    calls: Mutex<Vec<String>>,
}

impl MemoryAdminLookup {
    /// Create a store holding the given admins.
    pub fn with_admins(admins: impl IntoIterator<Item = Admin>) -> Self {
        Self {
            admins: admins.into_iter().map(|a| (a.email.clone(), a)).collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Subjects looked up so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubjectLookup for MemoryAdminLookup {
    type Record = Admin;

    async fn get_by_subject(&self, subject: &str) -> Result<Option<Admin>, AppError> {
        self.calls.lock().unwrap().push(subject.to_string());
        Ok(self.admins.get(subject).cloned())
    }
}

/// Lookup that always fails, as a database outage would.
#[derive(Debug, Default)]
pub struct FailingLookup;

#[async_trait]
impl SubjectLookup for FailingLookup {
    type Record = Admin;

    async fn get_by_subject(&self, _subject: &str) -> Result<Option<Admin>, AppError> {
        Err(AppError::new(ErrorKind::Database, "connection refused"))
    }
}

/// Build an admin record for `email`.
pub fn admin(email: &str, name: &str) -> Admin {
    let now = Utc::now();
    Admin {
        id: Uuid::new_v4(),
        email: email.to_string(),
        name: name.to_string(),
        password_hash: "hash".to_string(),
        created_at: now,
        updated_at: now,
    }
}

/// Token components wired to the test secret with a 15 minute default lifetime.
pub struct TestAuth {
    pub signing: Arc<SigningConfig>,
    pub issuer: TokenIssuer,
    pub validator: TokenValidator,
}

impl TestAuth {
    pub fn new() -> Self {
        let signing = Arc::new(
            SigningConfig::new(SECRET.as_bytes(), "HS256", Duration::minutes(15))
                .expect("valid signing config"),
        );
        Self {
            issuer: TokenIssuer::new(Arc::clone(&signing)),
            validator: TokenValidator::new(&signing),
            signing,
        }
    }

    pub fn current_user<L: SubjectLookup>(&self, lookup: Arc<L>) -> CurrentUserResolver<L> {
        CurrentUserResolver::new(self.validator.clone(), lookup)
    }

    pub fn signup(&self) -> SignupTokenResolver {
        SignupTokenResolver::new(self.validator.clone())
    }
}

/// Sign arbitrary claims with the test secret, bypassing the issuer.
pub fn craft_token(claims: serde_json::Value) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .expect("encode test token")
}

/// Seconds-since-epoch for `now + offset`.
pub fn exp_in(now: DateTime<Utc>, offset: Duration) -> i64 {
    (now + offset).timestamp()
}
