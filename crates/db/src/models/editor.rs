use cutroom_core::types::{EntityId, Timestamp};
use sqlx::FromRow;

/// A row from the `editors` table. Not `Serialize`: carries the password hash.
#[derive(Debug, Clone, FromRow)]
pub struct Editor {
    pub id: EntityId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub tier: String,
    pub trial: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct CreateEditor {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub tier: String,
    pub trial: bool,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateEditor {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub tier: Option<String>,
    pub trial: Option<bool>,
}
