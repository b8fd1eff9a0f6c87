//! Wire formats.
//!
//! - [`inbound`] -- Request payloads and their conversion into store drafts
//!   and merge-patches.
//! - [`outbound`] -- Response views built from hydrated graphs. Password
//!   hashes never reach a view.

pub mod inbound;
pub mod outbound;
