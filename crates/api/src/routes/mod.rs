pub mod ai;
pub mod auth;
pub mod channel;
pub mod editor;
pub mod health;
pub mod iteration;
pub mod user;
pub mod video;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup                     signup (public)
/// /auth/login                      login (public)
///
/// /users, /users/                 list, signup (public)
/// /users/{id}                      get, update, delete (self only for writes)
///
/// /channels                        list own, create
/// /channels/{id}                   get, update, delete (owner only for writes)
///
/// /videos                          list own (?channel_id=), create
/// /videos/{id}                     get, update, delete (channel owner for writes)
/// /videos/{id}/upload              publish latest iteration (POST)
///
/// /iterations                      list (?video_id=), create
/// /iterations/{id}                 get, update, delete
/// /iterations/{id}/notes           append note (POST)
///
/// /editors                         list, create
/// /editors/{id}                    get, update, delete
///
/// /ai/suggestions                  metadata suggestions (POST)
/// ```
///
/// The authorization gate is layered on by the router builder, not here.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", user::router())
        // A nested "/" only matches the bare prefix; the gate also admits the slashed form.
        .route(
            "/users/",
            get(handlers::user::list).post(handlers::auth::signup),
        )
        .nest("/channels", channel::router())
        .nest("/videos", video::router())
        .nest("/iterations", iteration::router())
        .nest("/editors", editor::router())
        .nest("/ai", ai::router())
}
