//! Admin entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered administrator, addressed by email in token subjects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Admin {
    /// Unique admin identifier.
    pub id: Uuid,
    /// Email address, unique case-insensitively.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Password hash.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// When the admin was created.
    pub created_at: DateTime<Utc>,
    /// When the admin was last updated.
    pub updated_at: DateTime<Utc>,
}
