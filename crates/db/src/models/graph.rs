//! Hydrated entity shapes.
//!
//! A graph is a row plus whichever relationships the requested
//! [`Hydration`](cutroom_core::hydration::Hydration) depth loads. `None`
//! means "not hydrated at this depth", which is distinct from an empty list.

use super::channel::Channel;
use super::editor::Editor;
use super::iteration::Iteration;
use super::user::User;
use super::video::Video;

#[derive(Debug, Clone)]
pub struct UserGraph {
    pub user: User,
    pub channels: Option<Vec<Channel>>,
}

#[derive(Debug, Clone)]
pub struct ChannelGraph {
    pub channel: Channel,
    pub owner: Option<Box<UserGraph>>,
    pub videos: Option<Vec<Video>>,
}

#[derive(Debug, Clone)]
pub struct VideoGraph {
    pub video: Video,
    pub channel: Option<Box<ChannelGraph>>,
    pub iterations: Option<Vec<Iteration>>,
    pub editors: Option<Vec<Editor>>,
}

#[derive(Debug, Clone)]
pub struct IterationGraph {
    pub iteration: Iteration,
    pub video: Option<Box<VideoGraph>>,
}
