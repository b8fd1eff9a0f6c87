//! Account rules shared by users and editors: tiers, email and password checks.

use validator::ValidateEmail;

use crate::error::CoreError;
use crate::status::validate_literal;

pub const TIER_FREE: &str = "free";
pub const TIER_BASIC: &str = "basic";
pub const TIER_PREMIUM: &str = "premium";

/// All valid account tiers.
pub const VALID_TIERS: &[&str] = &[TIER_FREE, TIER_BASIC, TIER_PREMIUM];

/// Tier assigned to new accounts when the payload leaves it empty.
pub const DEFAULT_TIER: &str = TIER_FREE;

/// Minimum accepted password length at signup.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Validate that an account tier is one of the known literals.
pub fn validate_tier(tier: &str) -> Result<(), CoreError> {
    validate_literal("tier", tier, VALID_TIERS)
}

/// Validate an email address for a new or updated account.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if email.validate_email() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "'{email}' is not a valid email address"
        )))
    }
}

/// Validate that a password meets the minimum length.
pub fn validate_password(password: &str) -> Result<(), CoreError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters long"
        )));
    }
    Ok(())
}
