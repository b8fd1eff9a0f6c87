//! Handler for AI metadata suggestions.

use axum::extract::State;
use axum::Json;
use cutroom_core::error::CoreError;
use cutroom_integrations::Suggestions;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;
use crate::transcode::inbound::SuggestionPayload;

/// POST /api/v1/ai/suggestions
///
/// Forwards the video metadata to the suggestion service and relays its
/// answer. Any service failure is a single 502.
pub async fn suggestions(
    State(state): State<AppState>,
    AppJson(input): AppJson<SuggestionPayload>,
) -> AppResult<Json<Suggestions>> {
    let service = state.suggestions.as_ref().ok_or_else(|| {
        AppError::Core(CoreError::Upstream(
            "AI suggestion service is not configured".into(),
        ))
    })?;

    let suggestions = service
        .suggest(&input.into())
        .await
        .map_err(|e| AppError::Core(CoreError::Upstream(e.to_string())))?;

    Ok(Json(suggestions))
}
