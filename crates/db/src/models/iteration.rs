//! Iteration (draft render) model.

use cutroom_core::types::{EntityId, Timestamp};
use sqlx::FromRow;

/// A row from the `iterations` table.
#[derive(Debug, Clone, FromRow)]
pub struct Iteration {
    pub id: EntityId,
    pub video_id: EntityId,
    pub url: String,
    /// Duration in whole seconds.
    pub length: i32,
    pub status: String,
    /// Newline-separated review notes.
    pub notes: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct CreateIteration {
    pub video_id: EntityId,
    pub url: String,
    pub length: i32,
    pub status: String,
    pub notes: String,
}

/// Merge-patch for an iteration. The parent video cannot change.
#[derive(Debug, Clone, Default)]
pub struct UpdateIteration {
    pub url: Option<String>,
    pub length: Option<i32>,
    pub status: Option<String>,
    pub notes: Option<String>,
}
