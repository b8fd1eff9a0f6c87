//! Channel entity model.

use cutroom_core::types::{EntityId, Timestamp};
use sqlx::FromRow;

/// A row from the `channels` table.
#[derive(Debug, Clone, FromRow)]
pub struct Channel {
    pub id: EntityId,
    pub name: String,
    /// Opaque credential for the publishing platform.
    pub api_key: String,
    pub owner_id: EntityId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert draft for a channel.
#[derive(Debug, Clone)]
pub struct CreateChannel {
    pub name: String,
    pub api_key: String,
    pub owner_id: EntityId,
}

/// Merge-patch for a channel. Ownership cannot be transferred.
#[derive(Debug, Clone, Default)]
pub struct UpdateChannel {
    pub name: Option<String>,
    pub api_key: Option<String>,
}
