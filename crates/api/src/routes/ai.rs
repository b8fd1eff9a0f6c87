use axum::routing::post;
use axum::Router;

use crate::handlers::ai;
use crate::state::AppState;

/// Routes mounted at `/ai`.
pub fn router() -> Router<AppState> {
    Router::new().route("/suggestions", post(ai::suggestions))
}
