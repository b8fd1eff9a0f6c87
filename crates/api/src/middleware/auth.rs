//! Bearer-token gate and the authenticated-caller extractor.
//!
//! Each request moves through `Unauthenticated -> TokenPresented ->
//! TokenValidated -> IdentityResolved -> Admitted`, or is rejected at the
//! first step that fails. Requests to an allow-listed path skip the gate.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use cutroom_core::error::CoreError;
use cutroom_core::types::EntityId;
use cutroom_db::repositories::UserRepo;

use crate::auth::jwt::validate_token;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Mount point of the gated API tree.
pub const API_PREFIX: &str = "/api/v1";

/// Paths (relative to `/api/v1`) admitted without a token, for any method.
pub const PUBLIC_PATHS: &[&str] = &["/auth/signup", "/auth/login", "/users"];

/// Authenticated caller, placed in request extensions by [`require_auth`].
///
/// Use this as an extractor parameter in any handler behind the gate:
///
/// ```ignore
/// async fn my_handler(auth: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = %auth.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The caller's user id (from `claims.sub`).
    pub user_id: EntityId,
    pub email: String,
}

impl<S: Send + Sync> FromRequestParts<S> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<AuthUser>().cloned().ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Authentication required".into()))
        })
    }
}

/// Whether `path` bypasses the gate. Matches on path only, ignoring method.
///
/// Accepts the path with or without the `/api/v1` prefix.
pub fn is_public(path: &str) -> bool {
    let path = path.strip_prefix(API_PREFIX).unwrap_or(path);
    let path = match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => path,
    };
    PUBLIC_PATHS.contains(&path)
}

/// Extract the token from an `Authorization: Bearer <token>` header value.
pub fn bearer_token(header: Option<&str>) -> Result<&str, CoreError> {
    let header = header
        .ok_or_else(|| CoreError::Unauthorized("Authorization header is required".into()))?;

    match header.strip_prefix("Bearer ").map(str::trim) {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(CoreError::Unauthorized(
            "Invalid Authorization format. Expected: Bearer <token>".into(),
        )),
    }
}

/// Gate middleware for the `/api/v1` tree.
///
/// Rejections: missing or malformed header, bad signature, wrong algorithm
/// and expired token are all 401; a token for a user that no longer exists
/// is 401; a failed user lookup is 500.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> AppResult<Response> {
    if is_public(request.uri().path()) {
        return Ok(next.run(request).await);
    }

    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    let token = bearer_token(header).inspect_err(|e| {
        tracing::debug!(path = %request.uri().path(), reason = %e, "Rejected request");
    })?;

    let claims = validate_token(token, &state.config.jwt).map_err(|e| {
        tracing::debug!(error = %e, "Rejected token");
        AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
    })?;

    let user = UserRepo::find_by_id(&state.pool, &claims.sub)
        .await?
        .ok_or_else(|| {
            tracing::debug!(user_id = %claims.sub, "Token subject no longer exists");
            AppError::Core(CoreError::Unauthorized("User not found".into()))
        })?;

    request.extensions_mut().insert(AuthUser {
        user_id: user.id,
        email: user.email,
    });

    Ok(next.run(request).await)
}
