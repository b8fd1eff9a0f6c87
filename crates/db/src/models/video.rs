//! Video entity model.

use cutroom_core::types::{EntityId, Timestamp};
use sqlx::FromRow;

/// A row from the `videos` table.
#[derive(Debug, Clone, FromRow)]
pub struct Video {
    pub id: EntityId,
    pub channel_id: EntityId,
    pub status: String,
    /// Locator of the source media.
    pub resources: String,
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub category: String,
    pub privacy_status: bool,
    /// Identifier assigned by the publishing platform once uploaded.
    pub external_id: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert draft for a video, including its initial editors.
#[derive(Debug, Clone)]
pub struct CreateVideo {
    pub channel_id: EntityId,
    pub status: String,
    pub resources: String,
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub category: String,
    pub privacy_status: bool,
    pub editor_ids: Vec<EntityId>,
}

/// Merge-patch for a video.
///
/// `editor_ids` is a union: listed editors are added if missing, editors not
/// listed are kept.
#[derive(Debug, Clone, Default)]
pub struct UpdateVideo {
    pub status: Option<String>,
    pub resources: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub category: Option<String>,
    pub privacy_status: Option<bool>,
    pub editor_ids: Option<Vec<EntityId>>,
}
