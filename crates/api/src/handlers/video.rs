//! Handlers for the `/videos` resource, including publishing.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use cutroom_core::error::CoreError;
use cutroom_core::hydration::Hydration;
use cutroom_core::types::EntityId;
use cutroom_db::models::channel::Channel;
use cutroom_db::models::video::Video;
use cutroom_db::repositories::{EditorRepo, IterationRepo, VideoRepo};
use cutroom_integrations::PublishRequest;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::handlers::channel::load_owned_channel;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::transcode::inbound::VideoPayload;
use crate::transcode::outbound::VideoView;

/// Query parameters for `GET /videos`.
#[derive(Debug, Default, Deserialize)]
pub struct VideoListParams {
    pub channel_id: Option<EntityId>,
}

/// Every referenced editor must exist before the video row is touched.
async fn ensure_editors_exist(state: &AppState, editor_ids: &[EntityId]) -> AppResult<()> {
    for id in editor_ids {
        if EditorRepo::find_by_id(&state.pool, id).await?.is_none() {
            return Err(AppError::Core(CoreError::not_found("Editor", id.clone())));
        }
    }
    Ok(())
}

/// Load a video and its channel, requiring the caller to own the channel.
async fn load_owned_video(
    state: &AppState,
    id: &str,
    auth: &AuthUser,
) -> AppResult<(Video, Channel)> {
    let video = VideoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Video", id)))?;
    let channel = load_owned_channel(state, &video.channel_id, auth).await?;
    Ok((video, channel))
}

/// GET /api/v1/videos[?channel_id=]
///
/// Without a filter, every video on every channel the caller owns.
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
    AppQuery(params): AppQuery<VideoListParams>,
) -> AppResult<Json<Vec<VideoView>>> {
    let videos = match params.channel_id {
        Some(channel_id) => {
            load_owned_channel(&state, &channel_id, &auth).await?;
            VideoRepo::list_by_channel(&state.pool, &channel_id).await?
        }
        None => VideoRepo::list_by_owner(&state.pool, &auth.user_id).await?,
    };
    Ok(Json(videos.into_iter().map(VideoView::from).collect()))
}

/// POST /api/v1/videos
///
/// The caller must own the target channel.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<VideoPayload>,
) -> AppResult<(StatusCode, Json<VideoView>)> {
    input.validate_create()?;
    load_owned_channel(&state, &input.channel_id, &auth).await?;
    ensure_editors_exist(&state, &input.editor_ids).await?;

    let video = VideoRepo::create(&state.pool, &input.into_create()).await?;
    tracing::info!(
        video_id = %video.video.id,
        channel_id = %video.video.channel_id,
        "Video created"
    );

    Ok((StatusCode::CREATED, Json(VideoView::from(video))))
}

/// GET /api/v1/videos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
) -> AppResult<Json<VideoView>> {
    let video = VideoRepo::get(&state.pool, &id, Hydration::Root)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Video", id)))?;
    Ok(Json(VideoView::from(video)))
}

/// PATCH /api/v1/videos/{id}
///
/// Listed editors are added; editors not listed are kept.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
    AppJson(input): AppJson<VideoPayload>,
) -> AppResult<Json<VideoView>> {
    load_owned_video(&state, &id, &auth).await?;
    input.validate_patch()?;
    ensure_editors_exist(&state, &input.editor_ids).await?;

    let video = VideoRepo::update(&state.pool, &id, &input.into_update())
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Video", id)))?;
    tracing::info!(video_id = %video.video.id, status = %video.video.status, "Video updated");

    Ok(Json(VideoView::from(video)))
}

/// DELETE /api/v1/videos/{id}
///
/// 409 while the video still has iterations.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
) -> AppResult<StatusCode> {
    load_owned_video(&state, &id, &auth).await?;

    if VideoRepo::delete(&state.pool, &id).await? {
        tracing::info!(video_id = %id, "Video deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Video", id)))
    }
}

/// POST /api/v1/videos/{id}/upload
///
/// Publishes the latest iteration with the channel's credential, then marks
/// the video published and stores the platform's id.
pub async fn upload(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
) -> AppResult<Json<VideoView>> {
    let (video, channel) = load_owned_video(&state, &id, &auth).await?;

    let publisher = state.publisher.as_ref().ok_or_else(|| {
        AppError::Core(CoreError::Upstream(
            "Publishing platform is not configured".into(),
        ))
    })?;

    let latest = IterationRepo::latest_for_video(&state.pool, &id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(
                "Video has no iterations to upload".into(),
            ))
        })?;

    let request = PublishRequest {
        api_key: channel.api_key,
        media_url: latest.url,
        title: video.title,
        description: video.description,
        tags: video.keywords,
        category_id: video.category,
        private: video.privacy_status,
    };
    let published = publisher
        .publish(&request)
        .await
        .map_err(|e| AppError::Core(CoreError::Upstream(e.to_string())))?;

    let video = VideoRepo::mark_published(&state.pool, &id, &published.id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Video", id)))?;
    tracing::info!(
        video_id = %video.video.id,
        iteration_id = %latest.id,
        external_id = %published.id,
        "Video published"
    );

    Ok(Json(VideoView::from(video)))
}
