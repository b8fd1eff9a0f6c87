//! Workflow status literals for videos and iterations.
//!
//! Statuses are stored as plain text columns; these constants are the only
//! values the API accepts and writes.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Video status
// ---------------------------------------------------------------------------

pub const VIDEO_STATUS_PENDING: &str = "pending";
pub const VIDEO_STATUS_PUBLISHED: &str = "published";
pub const VIDEO_STATUS_DRAFT: &str = "draft";

/// All valid video statuses.
pub const VALID_VIDEO_STATUSES: &[&str] = &[
    VIDEO_STATUS_PENDING,
    VIDEO_STATUS_PUBLISHED,
    VIDEO_STATUS_DRAFT,
];

/// Status assigned to a new video when the payload leaves it empty.
pub const DEFAULT_VIDEO_STATUS: &str = VIDEO_STATUS_DRAFT;

// ---------------------------------------------------------------------------
// Iteration status
// ---------------------------------------------------------------------------

pub const ITERATION_STATUS_PROCESSING: &str = "processing";
pub const ITERATION_STATUS_COMPLETED: &str = "completed";
pub const ITERATION_STATUS_FAILED: &str = "failed";

/// All valid iteration statuses.
pub const VALID_ITERATION_STATUSES: &[&str] = &[
    ITERATION_STATUS_PROCESSING,
    ITERATION_STATUS_COMPLETED,
    ITERATION_STATUS_FAILED,
];

/// Status assigned to a new iteration when the payload leaves it empty.
pub const DEFAULT_ITERATION_STATUS: &str = ITERATION_STATUS_PROCESSING;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate that a video status is one of the known literals.
pub fn validate_video_status(status: &str) -> Result<(), CoreError> {
    validate_literal("video status", status, VALID_VIDEO_STATUSES)
}

/// Validate that an iteration status is one of the known literals.
pub fn validate_iteration_status(status: &str) -> Result<(), CoreError> {
    validate_literal("iteration status", status, VALID_ITERATION_STATUSES)
}

pub(crate) fn validate_literal(
    field: &str,
    value: &str,
    allowed: &[&str],
) -> Result<(), CoreError> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid {field} '{value}'. Must be one of: {}",
            allowed.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_every_video_status() {
        for status in VALID_VIDEO_STATUSES {
            assert!(validate_video_status(status).is_ok(), "{status} should be valid");
        }
    }

    #[test]
    fn rejects_unknown_video_status() {
        let err = validate_video_status("archived").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("'archived'"));
        assert!(msg.contains("pending, published, draft"));
    }

    #[test]
    fn video_status_is_case_sensitive() {
        assert!(validate_video_status("Published").is_err());
    }

    #[test]
    fn iteration_statuses() {
        assert!(validate_iteration_status("completed").is_ok());
        assert!(validate_iteration_status("done").is_err());
        assert_eq!(DEFAULT_ITERATION_STATUS, "processing");
    }
}
