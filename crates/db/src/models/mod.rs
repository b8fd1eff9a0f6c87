//! Row structs, drafts and patches.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create struct for inserts
//! - An update struct (all `Option` fields) where `None` means "unchanged"
//!
//! [`graph`] holds the hydrated shapes returned by the repositories.

pub mod channel;
pub mod editor;
pub mod graph;
pub mod iteration;
pub mod user;
pub mod video;
