//! Handlers for the `/users` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use cutroom_core::error::CoreError;
use cutroom_core::hydration::Hydration;
use cutroom_core::types::EntityId;
use cutroom_db::repositories::{ChannelRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::handlers::hash_if_present;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::transcode::inbound::AccountPayload;
use crate::transcode::outbound::UserView;

fn ensure_self(auth: &AuthUser, id: &str, action: &str) -> AppResult<()> {
    if auth.user_id != id {
        return Err(AppError::Core(CoreError::Forbidden(format!(
            "You can only {action} your own account"
        ))));
    }
    Ok(())
}

/// GET /api/v1/users
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<UserView>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users.into_iter().map(UserView::from).collect()))
}

/// GET /api/v1/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
) -> AppResult<Json<UserView>> {
    let user = UserRepo::get(&state.pool, &id, Hydration::Root)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("User", id)))?;
    Ok(Json(UserView::from(user)))
}

/// PATCH /api/v1/users/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
    AppJson(input): AppJson<AccountPayload>,
) -> AppResult<Json<UserView>> {
    ensure_self(&auth, &id, "update")?;
    input.validate_patch()?;

    let password_hash = hash_if_present(&input.password)?;
    let user = UserRepo::update(&state.pool, &id, &input.into_update_user(password_hash))
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("User", id)))?;

    tracing::info!(user_id = %user.user.id, "User updated");
    Ok(Json(UserView::from(user)))
}

/// DELETE /api/v1/users/{id}
///
/// Deletes the user's channels one by one, then the user. The sequence is not
/// transactional: if a channel delete fails (e.g. it still has videos), the
/// user survives but channels already deleted stay deleted.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
) -> AppResult<StatusCode> {
    ensure_self(&auth, &id, "delete")?;

    let channels = ChannelRepo::list_rows_by_owner(&state.pool, &id).await?;
    for channel in &channels {
        ChannelRepo::delete(&state.pool, &channel.id).await.inspect_err(|e| {
            tracing::warn!(user_id = %id, channel_id = %channel.id, error = %e, "Channel cascade failed");
        })?;
    }

    if UserRepo::delete(&state.pool, &id).await? {
        tracing::info!(user_id = %id, channels = channels.len(), "User deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("User", id)))
    }
}
