//! Handlers for the `/channels` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use cutroom_core::error::CoreError;
use cutroom_core::hydration::Hydration;
use cutroom_core::types::EntityId;
use cutroom_db::models::channel::Channel;
use cutroom_db::repositories::ChannelRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::transcode::inbound::ChannelPayload;
use crate::transcode::outbound::ChannelView;

/// Load a channel row and require the caller to own it.
///
/// 404 if the channel does not exist, 403 if someone else owns it.
pub(crate) async fn load_owned_channel(
    state: &AppState,
    id: &str,
    auth: &AuthUser,
) -> AppResult<Channel> {
    let channel = ChannelRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Channel", id)))?;

    if channel.owner_id != auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "You do not own this channel".into(),
        )));
    }
    Ok(channel)
}

/// GET /api/v1/channels
///
/// Only the caller's own channels.
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ChannelView>>> {
    let channels = ChannelRepo::list_by_owner(&state.pool, &auth.user_id).await?;
    Ok(Json(channels.into_iter().map(ChannelView::from).collect()))
}

/// POST /api/v1/channels
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<ChannelPayload>,
) -> AppResult<(StatusCode, Json<ChannelView>)> {
    input.validate_create()?;

    let channel = ChannelRepo::create(&state.pool, &input.into_create(auth.user_id)).await?;
    tracing::info!(
        channel_id = %channel.channel.id,
        owner_id = %channel.channel.owner_id,
        "Channel created"
    );

    Ok((StatusCode::CREATED, Json(ChannelView::from(channel))))
}

/// GET /api/v1/channels/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
) -> AppResult<Json<ChannelView>> {
    let channel = ChannelRepo::get(&state.pool, &id, Hydration::Root)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Channel", id)))?;
    Ok(Json(ChannelView::from(channel)))
}

/// PATCH /api/v1/channels/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
    AppJson(input): AppJson<ChannelPayload>,
) -> AppResult<Json<ChannelView>> {
    load_owned_channel(&state, &id, &auth).await?;

    let channel = ChannelRepo::update(&state.pool, &id, &input.into_update())
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Channel", id)))?;
    Ok(Json(ChannelView::from(channel)))
}

/// DELETE /api/v1/channels/{id}
///
/// 409 while the channel still has videos.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
) -> AppResult<StatusCode> {
    load_owned_channel(&state, &id, &auth).await?;

    if ChannelRepo::delete(&state.pool, &id).await? {
        tracing::info!(channel_id = %id, "Channel deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Channel", id)))
    }
}
