//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Reads that return graphs
//! take an explicit [`Hydration`](cutroom_core::hydration::Hydration) depth.

pub mod channel_repo;
pub mod editor_repo;
pub mod iteration_repo;
pub mod user_repo;
pub mod video_repo;

pub use channel_repo::ChannelRepo;
pub use editor_repo::EditorRepo;
pub use iteration_repo::IterationRepo;
pub use user_repo::UserRepo;
pub use video_repo::VideoRepo;

/// Fresh opaque identifier for a new row.
pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
