//! Request admission.
//!
//! - [`auth::require_auth`] -- Gate layered over `/api/v1`: validates the
//!   bearer token and resolves the caller before any handler runs.
//! - [`auth::AuthUser`] -- Extractor for the identity the gate resolved.

pub mod auth;
