//! HTTP clients for the external collaborators: the AI metadata suggestion
//! service and the video publishing platform.
//!
//! Each collaborator is a trait so the API can run with a fake in tests and
//! with no collaborator at all when the corresponding URL is not configured.

pub mod ai;
pub mod publishing;

pub use ai::{HttpSuggestionClient, SuggestionError, SuggestionRequest, SuggestionService, Suggestions};
pub use publishing::{HttpPublisher, PublishError, PublishRequest, PublishedVideo, Publisher};
