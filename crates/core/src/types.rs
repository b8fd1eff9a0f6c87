/// Entity identifiers are opaque strings (UUID v4 text) assigned at creation.
pub type EntityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
