//! Outbound views.
//!
//! Views mirror the hydrated graphs. A relationship that was not hydrated at
//! the graph's depth is omitted from the JSON entirely, while a hydrated but
//! empty list serializes as `[]`.

use cutroom_core::types::{EntityId, Timestamp};
use cutroom_db::models::channel::Channel;
use cutroom_db::models::editor::Editor;
use cutroom_db::models::graph::{ChannelGraph, IterationGraph, UserGraph, VideoGraph};
use cutroom_db::models::iteration::Iteration;
use cutroom_db::models::user::User;
use cutroom_db::models::video::Video;
use serde::Serialize;

fn map_all<T, V: From<T>>(items: Option<Vec<T>>) -> Option<Vec<V>> {
    items.map(|items| items.into_iter().map(V::from).collect())
}

// ---------------------------------------------------------------------------
// Users and editors
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct UserView {
    pub id: EntityId,
    pub username: String,
    pub email: String,
    pub tier: String,
    pub trial: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<ChannelView>>,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            tier: user.tier,
            trial: user.trial,
            created_at: user.created_at,
            updated_at: user.updated_at,
            channels: None,
        }
    }
}

impl From<UserGraph> for UserView {
    fn from(graph: UserGraph) -> Self {
        Self {
            channels: map_all(graph.channels),
            ..Self::from(graph.user)
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EditorView {
    pub id: EntityId,
    pub username: String,
    pub email: String,
    pub tier: String,
    pub trial: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Editor> for EditorView {
    fn from(editor: Editor) -> Self {
        Self {
            id: editor.id,
            username: editor.username,
            email: editor.email,
            tier: editor.tier,
            trial: editor.trial,
            created_at: editor.created_at,
            updated_at: editor.updated_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Channels
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ChannelView {
    pub id: EntityId,
    pub name: String,
    pub api_key: String,
    pub owner_id: EntityId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Box<UserView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub videos: Option<Vec<VideoView>>,
}

impl From<Channel> for ChannelView {
    fn from(channel: Channel) -> Self {
        Self {
            id: channel.id,
            name: channel.name,
            api_key: channel.api_key,
            owner_id: channel.owner_id,
            created_at: channel.created_at,
            updated_at: channel.updated_at,
            owner: None,
            videos: None,
        }
    }
}

impl From<ChannelGraph> for ChannelView {
    fn from(graph: ChannelGraph) -> Self {
        Self {
            owner: graph.owner.map(|owner| Box::new(UserView::from(*owner))),
            videos: map_all(graph.videos),
            ..Self::from(graph.channel)
        }
    }
}

// ---------------------------------------------------------------------------
// Videos
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct VideoView {
    pub id: EntityId,
    pub channel_id: EntityId,
    pub status: String,
    pub resources: String,
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub category: String,
    pub privacy_status: bool,
    pub external_id: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<Box<ChannelView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iterations: Option<Vec<IterationView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editors: Option<Vec<EditorView>>,
}

impl From<Video> for VideoView {
    fn from(video: Video) -> Self {
        Self {
            id: video.id,
            channel_id: video.channel_id,
            status: video.status,
            resources: video.resources,
            title: video.title,
            description: video.description,
            keywords: video.keywords,
            category: video.category,
            privacy_status: video.privacy_status,
            external_id: video.external_id,
            created_at: video.created_at,
            updated_at: video.updated_at,
            channel: None,
            iterations: None,
            editors: None,
        }
    }
}

impl From<VideoGraph> for VideoView {
    fn from(graph: VideoGraph) -> Self {
        Self {
            channel: graph
                .channel
                .map(|channel| Box::new(ChannelView::from(*channel))),
            iterations: map_all(graph.iterations),
            editors: map_all(graph.editors),
            ..Self::from(graph.video)
        }
    }
}

// ---------------------------------------------------------------------------
// Iterations
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct IterationView {
    pub id: EntityId,
    pub video_id: EntityId,
    pub url: String,
    pub length: i32,
    pub status: String,
    pub notes: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<Box<VideoView>>,
}

impl From<Iteration> for IterationView {
    fn from(iteration: Iteration) -> Self {
        Self {
            id: iteration.id,
            video_id: iteration.video_id,
            url: iteration.url,
            length: iteration.length,
            status: iteration.status,
            notes: iteration.notes,
            created_at: iteration.created_at,
            updated_at: iteration.updated_at,
            video: None,
        }
    }
}

impl From<IterationGraph> for IterationView {
    fn from(graph: IterationGraph) -> Self {
        Self {
            video: graph.video.map(|video| Box::new(VideoView::from(*video))),
            ..Self::from(graph.iteration)
        }
    }
}
