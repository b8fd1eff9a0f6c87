//! User entity model.

use cutroom_core::types::{EntityId, Timestamp};
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Carries the password hash, so it must never be serialized to API responses directly.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: EntityId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub tier: String,
    pub trial: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert draft for a user. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub tier: String,
    pub trial: bool,
}

/// Merge-patch for a user.
#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub tier: Option<String>,
    pub trial: Option<bool>,
}
