//! Inbound payloads.
//!
//! Every payload is decoded with all fields defaulted: unknown fields are
//! ignored and a missing field takes its type's zero value. Conversion into a
//! store patch goes through [`present`], so a field that is absent and a
//! field that carries a zero value both mean "unchanged".

use cutroom_core::accounts::{validate_email, validate_password, validate_tier, DEFAULT_TIER};
use cutroom_core::error::CoreError;
use cutroom_core::metadata::{normalize_keywords, validate_note_content};
use cutroom_core::patch::present;
use cutroom_core::status::{
    validate_iteration_status, validate_video_status, DEFAULT_ITERATION_STATUS,
    DEFAULT_VIDEO_STATUS,
};
use cutroom_core::types::EntityId;
use cutroom_db::models::channel::{CreateChannel, UpdateChannel};
use cutroom_db::models::editor::{CreateEditor, UpdateEditor};
use cutroom_db::models::iteration::{CreateIteration, UpdateIteration};
use cutroom_db::models::user::{CreateUser, UpdateUser};
use cutroom_db::models::video::{CreateVideo, UpdateVideo};
use cutroom_integrations::SuggestionRequest;
use serde::{Deserialize, Deserializer};

fn required(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Decode an explicit `null` as the type's zero value, same as a missing field.
fn null_as_zero<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn or_default(value: String, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value
    }
}

// ---------------------------------------------------------------------------
// Accounts (users and editors)
// ---------------------------------------------------------------------------

/// Body for signup, user and editor create/patch.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AccountPayload {
    #[serde(deserialize_with = "null_as_zero")]
    pub username: String,
    #[serde(deserialize_with = "null_as_zero")]
    pub email: String,
    #[serde(deserialize_with = "null_as_zero")]
    pub password: String,
    #[serde(deserialize_with = "null_as_zero")]
    pub tier: String,
    #[serde(deserialize_with = "null_as_zero")]
    pub trial: bool,
}

impl AccountPayload {
    /// Email and password are required on create.
    pub fn validate_create(&self) -> Result<(), CoreError> {
        required("email", &self.email)?;
        required("password", &self.password)?;
        self.validate_patch()
    }

    /// Only the fields that are present are checked.
    pub fn validate_patch(&self) -> Result<(), CoreError> {
        if !self.email.is_empty() {
            validate_email(&self.email)?;
        }
        if !self.password.is_empty() {
            validate_password(&self.password)?;
        }
        if !self.tier.is_empty() {
            validate_tier(&self.tier)?;
        }
        Ok(())
    }

    pub fn into_create_user(self, password_hash: String) -> CreateUser {
        CreateUser {
            username: self.username,
            email: self.email,
            password_hash,
            tier: or_default(self.tier, DEFAULT_TIER),
            trial: self.trial,
        }
    }

    pub fn into_update_user(self, password_hash: Option<String>) -> UpdateUser {
        UpdateUser {
            username: present(self.username),
            email: present(self.email),
            password_hash,
            tier: present(self.tier),
            trial: present(self.trial),
        }
    }

    pub fn into_create_editor(self, password_hash: String) -> CreateEditor {
        CreateEditor {
            username: self.username,
            email: self.email,
            password_hash,
            tier: or_default(self.tier, DEFAULT_TIER),
            trial: self.trial,
        }
    }

    pub fn into_update_editor(self, password_hash: Option<String>) -> UpdateEditor {
        UpdateEditor {
            username: present(self.username),
            email: present(self.email),
            password_hash,
            tier: present(self.tier),
            trial: present(self.trial),
        }
    }
}

/// Body for `POST /auth/login`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginPayload {
    #[serde(deserialize_with = "null_as_zero")]
    pub email: String,
    #[serde(deserialize_with = "null_as_zero")]
    pub password: String,
}

impl LoginPayload {
    pub fn validate(&self) -> Result<(), CoreError> {
        required("email", &self.email)?;
        required("password", &self.password)
    }
}

// ---------------------------------------------------------------------------
// Channels
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ChannelPayload {
    #[serde(deserialize_with = "null_as_zero")]
    pub name: String,
    #[serde(deserialize_with = "null_as_zero")]
    pub api_key: String,
}

impl ChannelPayload {
    pub fn validate_create(&self) -> Result<(), CoreError> {
        required("name", &self.name)
    }

    /// The owner always comes from the authenticated caller, never the body.
    pub fn into_create(self, owner_id: EntityId) -> CreateChannel {
        CreateChannel {
            name: self.name,
            api_key: self.api_key,
            owner_id,
        }
    }

    pub fn into_update(self) -> UpdateChannel {
        UpdateChannel {
            name: present(self.name),
            api_key: present(self.api_key),
        }
    }
}

// ---------------------------------------------------------------------------
// Videos
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct VideoPayload {
    #[serde(deserialize_with = "null_as_zero")]
    pub channel_id: EntityId,
    #[serde(deserialize_with = "null_as_zero")]
    pub status: String,
    #[serde(deserialize_with = "null_as_zero")]
    pub resources: String,
    #[serde(deserialize_with = "null_as_zero")]
    pub title: String,
    #[serde(deserialize_with = "null_as_zero")]
    pub description: String,
    #[serde(deserialize_with = "null_as_zero")]
    pub keywords: Vec<String>,
    #[serde(deserialize_with = "null_as_zero")]
    pub category: String,
    #[serde(deserialize_with = "null_as_zero")]
    pub privacy_status: bool,
    #[serde(deserialize_with = "null_as_zero")]
    pub editor_ids: Vec<EntityId>,
}

impl VideoPayload {
    pub fn validate_create(&self) -> Result<(), CoreError> {
        required("channel_id", &self.channel_id)?;
        self.validate_patch()
    }

    pub fn validate_patch(&self) -> Result<(), CoreError> {
        if !self.status.is_empty() {
            validate_video_status(&self.status)?;
        }
        Ok(())
    }

    pub fn into_create(self) -> CreateVideo {
        CreateVideo {
            channel_id: self.channel_id,
            status: or_default(self.status, DEFAULT_VIDEO_STATUS),
            resources: self.resources,
            title: self.title,
            description: self.description,
            keywords: normalize_keywords(self.keywords),
            category: self.category,
            privacy_status: self.privacy_status,
            editor_ids: self.editor_ids,
        }
    }

    /// `channel_id` is ignored: a video cannot move between channels.
    pub fn into_update(self) -> UpdateVideo {
        UpdateVideo {
            status: present(self.status),
            resources: present(self.resources),
            title: present(self.title),
            description: present(self.description),
            keywords: present(normalize_keywords(self.keywords)),
            category: present(self.category),
            privacy_status: present(self.privacy_status),
            editor_ids: present(self.editor_ids),
        }
    }
}

// ---------------------------------------------------------------------------
// Iterations and notes
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct IterationPayload {
    #[serde(deserialize_with = "null_as_zero")]
    pub video_id: EntityId,
    #[serde(deserialize_with = "null_as_zero")]
    pub url: String,
    /// Whole seconds.
    #[serde(deserialize_with = "null_as_zero")]
    pub length: i32,
    #[serde(deserialize_with = "null_as_zero")]
    pub status: String,
    #[serde(deserialize_with = "null_as_zero")]
    pub notes: String,
}

impl IterationPayload {
    pub fn validate_create(&self) -> Result<(), CoreError> {
        required("video_id", &self.video_id)?;
        self.validate_patch()
    }

    pub fn validate_patch(&self) -> Result<(), CoreError> {
        if !self.status.is_empty() {
            validate_iteration_status(&self.status)?;
        }
        if self.length < 0 {
            return Err(CoreError::Validation("length must not be negative".into()));
        }
        Ok(())
    }

    pub fn into_create(self) -> CreateIteration {
        CreateIteration {
            video_id: self.video_id,
            url: self.url,
            length: self.length,
            status: or_default(self.status, DEFAULT_ITERATION_STATUS),
            notes: self.notes,
        }
    }

    pub fn into_update(self) -> UpdateIteration {
        UpdateIteration {
            url: present(self.url),
            length: present(self.length),
            status: present(self.status),
            notes: present(self.notes),
        }
    }
}

/// Body for `POST /iterations/{id}/notes`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NotePayload {
    #[serde(deserialize_with = "null_as_zero")]
    pub content: String,
}

impl NotePayload {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_note_content(&self.content)
    }
}

// ---------------------------------------------------------------------------
// AI suggestions
// ---------------------------------------------------------------------------

/// Body for `POST /ai/suggestions`: the video metadata to improve.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SuggestionPayload {
    #[serde(deserialize_with = "null_as_zero")]
    pub title: String,
    #[serde(deserialize_with = "null_as_zero")]
    pub description: String,
    #[serde(deserialize_with = "null_as_zero")]
    pub keywords: Vec<String>,
    #[serde(deserialize_with = "null_as_zero")]
    pub category: String,
}

impl From<SuggestionPayload> for SuggestionRequest {
    fn from(payload: SuggestionPayload) -> Self {
        Self {
            title: payload.title,
            description: payload.description,
            keywords: normalize_keywords(payload.keywords),
            category: payload.category,
        }
    }
}
