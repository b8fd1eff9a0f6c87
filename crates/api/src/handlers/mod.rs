pub mod ai;
pub mod auth;
pub mod channel;
pub mod editor;
pub mod iteration;
pub mod user;
pub mod video;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};

/// Hash a password from a request body, mapping failure to a 500.
pub(crate) fn hash_for_storage(password: &str) -> AppResult<String> {
    hash_password(password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))
}

/// Hash a password only when the patch carries one.
pub(crate) fn hash_if_present(password: &str) -> AppResult<Option<String>> {
    if password.is_empty() {
        Ok(None)
    } else {
        hash_for_storage(password).map(Some)
    }
}
