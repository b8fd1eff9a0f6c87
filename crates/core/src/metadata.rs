//! Video metadata and iteration note rules.

use crate::error::CoreError;

/// Maximum length of a single note appended to an iteration.
pub const MAX_NOTE_CONTENT_LENGTH: usize = 10_000;

/// Normalize a keyword list into a set: trim each entry, drop empties, and
/// remove duplicates while keeping the first occurrence.
pub fn normalize_keywords(keywords: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(keywords.len());
    for keyword in keywords {
        let trimmed = keyword.trim();
        if trimmed.is_empty() || out.iter().any(|k| k == trimmed) {
            continue;
        }
        out.push(trimmed.to_string());
    }
    out
}

/// Validate note content: must be non-blank and within the length limit.
pub fn validate_note_content(content: &str) -> Result<(), CoreError> {
    if content.trim().is_empty() {
        return Err(CoreError::Validation("Note content cannot be empty".into()));
    }
    if content.chars().count() > MAX_NOTE_CONTENT_LENGTH {
        return Err(CoreError::Validation(format!(
            "Note content exceeds maximum length of {MAX_NOTE_CONTENT_LENGTH} characters"
        )));
    }
    Ok(())
}
