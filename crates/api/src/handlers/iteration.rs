//! Handlers for the `/iterations` resource and its notes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use cutroom_core::error::CoreError;
use cutroom_core::hydration::Hydration;
use cutroom_core::types::EntityId;
use cutroom_db::repositories::{IterationRepo, VideoRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::state::AppState;
use crate::transcode::inbound::{IterationPayload, NotePayload};
use crate::transcode::outbound::IterationView;

/// Query parameters for `GET /iterations`.
#[derive(Debug, Default, Deserialize)]
pub struct IterationListParams {
    pub video_id: Option<EntityId>,
}

/// GET /api/v1/iterations[?video_id=]
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<IterationListParams>,
) -> AppResult<Json<Vec<IterationView>>> {
    let iterations = match params.video_id {
        Some(video_id) => IterationRepo::list_by_video(&state.pool, &video_id).await?,
        None => IterationRepo::list(&state.pool).await?,
    };
    Ok(Json(iterations.into_iter().map(IterationView::from).collect()))
}

/// POST /api/v1/iterations
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<IterationPayload>,
) -> AppResult<(StatusCode, Json<IterationView>)> {
    input.validate_create()?;
    if VideoRepo::find_by_id(&state.pool, &input.video_id).await?.is_none() {
        return Err(AppError::Core(CoreError::not_found(
            "Video",
            input.video_id,
        )));
    }

    let iteration = IterationRepo::create(&state.pool, &input.into_create()).await?;
    tracing::info!(
        iteration_id = %iteration.iteration.id,
        video_id = %iteration.iteration.video_id,
        "Iteration created"
    );

    Ok((StatusCode::CREATED, Json(IterationView::from(iteration))))
}

/// GET /api/v1/iterations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
) -> AppResult<Json<IterationView>> {
    let iteration = IterationRepo::get(&state.pool, &id, Hydration::Root)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Iteration", id)))?;
    Ok(Json(IterationView::from(iteration)))
}

/// PATCH /api/v1/iterations/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
    AppJson(input): AppJson<IterationPayload>,
) -> AppResult<Json<IterationView>> {
    input.validate_patch()?;

    let iteration = IterationRepo::update(&state.pool, &id, &input.into_update())
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Iteration", id)))?;
    Ok(Json(IterationView::from(iteration)))
}

/// DELETE /api/v1/iterations/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
) -> AppResult<StatusCode> {
    if IterationRepo::delete(&state.pool, &id).await? {
        tracing::info!(iteration_id = %id, "Iteration deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Iteration", id)))
    }
}

/// POST /api/v1/iterations/{id}/notes
///
/// Appends the note to the iteration's existing notes and returns the
/// updated iteration.
pub async fn add_note(
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
    AppJson(input): AppJson<NotePayload>,
) -> AppResult<Json<IterationView>> {
    input.validate()?;

    if !IterationRepo::append_note(&state.pool, &id, &input.content).await? {
        return Err(AppError::Core(CoreError::not_found("Iteration", id)));
    }

    let iteration = IterationRepo::get(&state.pool, &id, Hydration::Root)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Iteration", id)))?;
    Ok(Json(IterationView::from(iteration)))
}
