//! Handlers for the `/auth` resource (signup, login).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use cutroom_core::error::CoreError;
use cutroom_core::hydration::Hydration;
use cutroom_db::repositories::UserRepo;
use serde::Serialize;

use crate::auth::jwt::generate_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::handlers::hash_for_storage;
use crate::state::AppState;
use crate::transcode::inbound::{AccountPayload, LoginPayload};
use crate::transcode::outbound::UserView;

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserView,
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
}

/// POST /api/v1/auth/signup
///
/// Also served at `POST /api/v1/users`.
pub async fn signup(
    State(state): State<AppState>,
    AppJson(input): AppJson<AccountPayload>,
) -> AppResult<(StatusCode, Json<UserView>)> {
    input.validate_create()?;
    let password_hash = hash_for_storage(&input.password)?;

    let user = UserRepo::create(&state.pool, &input.into_create_user(password_hash)).await?;
    tracing::info!(user_id = %user.user.id, "User signed up");

    Ok((StatusCode::CREATED, Json(UserView::from(user))))
}

/// POST /api/v1/auth/login
///
/// Unknown email and wrong password produce the same 401.
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginPayload>,
) -> AppResult<Json<LoginResponse>> {
    input.validate()?;

    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(invalid_credentials)?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::debug!(user_id = %user.id, "Login rejected");
        return Err(invalid_credentials());
    }

    let token = generate_token(&user.id, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token signing error: {e}")))?;

    let graph = UserRepo::hydrate(&state.pool, user, Hydration::Root).await?;
    tracing::info!(user_id = %graph.user.id, "User logged in");

    Ok(Json(LoginResponse {
        token,
        expires_in: state.config.jwt.expires_in_secs(),
        user: UserView::from(graph),
    }))
}
