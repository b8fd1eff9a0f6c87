//! Handlers for the `/editors` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use cutroom_core::error::CoreError;
use cutroom_core::types::EntityId;
use cutroom_db::repositories::EditorRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::handlers::{hash_for_storage, hash_if_present};
use crate::state::AppState;
use crate::transcode::inbound::AccountPayload;
use crate::transcode::outbound::EditorView;

/// GET /api/v1/editors
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<EditorView>>> {
    let editors = EditorRepo::list(&state.pool).await?;
    Ok(Json(editors.into_iter().map(EditorView::from).collect()))
}

/// POST /api/v1/editors
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<AccountPayload>,
) -> AppResult<(StatusCode, Json<EditorView>)> {
    input.validate_create()?;
    let password_hash = hash_for_storage(&input.password)?;

    let editor = EditorRepo::create(&state.pool, &input.into_create_editor(password_hash)).await?;
    tracing::info!(editor_id = %editor.id, "Editor created");

    Ok((StatusCode::CREATED, Json(EditorView::from(editor))))
}

/// GET /api/v1/editors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
) -> AppResult<Json<EditorView>> {
    let editor = EditorRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Editor", id)))?;
    Ok(Json(EditorView::from(editor)))
}

/// PATCH /api/v1/editors/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
    AppJson(input): AppJson<AccountPayload>,
) -> AppResult<Json<EditorView>> {
    input.validate_patch()?;

    let password_hash = hash_if_present(&input.password)?;
    let editor = EditorRepo::update(&state.pool, &id, &input.into_update_editor(password_hash))
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Editor", id)))?;
    Ok(Json(EditorView::from(editor)))
}

/// DELETE /api/v1/editors/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
) -> AppResult<StatusCode> {
    if EditorRepo::delete(&state.pool, &id).await? {
        tracing::info!(editor_id = %id, "Editor deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Editor", id)))
    }
}
