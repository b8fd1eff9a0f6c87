//! Route definitions for the `/iterations` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::iteration;
use crate::state::AppState;

/// Routes mounted at `/iterations`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /{id}          -> get_by_id
/// PATCH  /{id}          -> update
/// DELETE /{id}          -> delete
/// POST   /{id}/notes    -> add_note
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(iteration::list).post(iteration::create))
        .route(
            "/{id}",
            get(iteration::get_by_id)
                .patch(iteration::update)
                .delete(iteration::delete),
        )
        .route("/{id}/notes", post(iteration::add_note))
}
