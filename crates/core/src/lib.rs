//! Domain rules shared by the store and the API: error taxonomy, status and
//! tier literals, merge-patch semantics, and the hydration depth rule.

pub mod accounts;
pub mod error;
pub mod hydration;
pub mod metadata;
pub mod patch;
pub mod status;
pub mod types;
