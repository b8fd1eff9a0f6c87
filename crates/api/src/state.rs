use std::sync::Arc;

use cutroom_integrations::{Publisher, SuggestionService};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: cutroom_db::DbPool,
    /// Server configuration (JWT secret read by the auth gate and login).
    pub config: Arc<ServerConfig>,
    /// AI metadata suggestion service, when configured.
    pub suggestions: Option<Arc<dyn SuggestionService>>,
    /// Video publishing platform, when configured.
    pub publisher: Option<Arc<dyn Publisher>>,
}
