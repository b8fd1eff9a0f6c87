//! Route definitions for the `/editors` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::editor;
use crate::state::AppState;

/// Routes mounted at `/editors`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(editor::list).post(editor::create))
        .route(
            "/{id}",
            get(editor::get_by_id)
                .patch(editor::update)
                .delete(editor::delete),
        )
}
