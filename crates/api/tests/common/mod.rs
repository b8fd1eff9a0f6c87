#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use cutroom_api::auth::jwt::{generate_token, JwtConfig};
use cutroom_api::auth::password::hash_password;
use cutroom_api::config::ServerConfig;
use cutroom_api::router::build_app_router;
use cutroom_api::state::AppState;
use cutroom_db::models::user::CreateUser;
use cutroom_db::repositories::UserRepo;
use cutroom_integrations::{
    PublishError, PublishRequest, PublishedVideo, Publisher, SuggestionError, SuggestionRequest,
    SuggestionService, Suggestions,
};

pub const TEST_PASSWORD: &str = "correct-horse-battery";

/// JWT settings shared by the test app and [`token_for`].
pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test-secret-for-integration-tests".to_string(),
        expiry_hours: 24,
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: test_jwt_config(),
        ai_service_url: None,
        publish_api_url: None,
    }
}

/// Build the full application router with no external services configured.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, None, None)
}

/// Build the full application router with the given collaborators.
///
/// Goes through the same [`build_app_router`] as `main.rs`, so the auth gate
/// and every middleware layer are exercised.
pub fn build_test_app_with(
    pool: PgPool,
    suggestions: Option<Arc<dyn SuggestionService>>,
    publisher: Option<Arc<dyn Publisher>>,
) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        suggestions,
        publisher,
    };
    build_app_router(state, &config)
}

/// Sign a token for `user_id` with the test secret.
pub fn token_for(user_id: &str) -> String {
    generate_token(user_id, &test_jwt_config()).expect("token generation should succeed")
}

/// Insert a user directly and return `(user_id, token)`.
pub async fn create_user_with_token(pool: &PgPool, username: &str) -> (String, String) {
    let input = CreateUser {
        username: username.to_string(),
        email: format!("{username}@test.com"),
        password_hash: hash_password(TEST_PASSWORD).expect("hashing should succeed"),
        tier: "free".to_string(),
        trial: false,
    };
    let user = UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed");
    let token = token_for(&user.user.id);
    (user.user.id, token)
}

// ---------------------------------------------------------------------------
// Fake collaborators
// ---------------------------------------------------------------------------

/// Suggestion service that records requests and answers with a fixed value
/// or fails with a fixed status.
#[derive(Default)]
pub struct FakeSuggestions {
    pub requests: Mutex<Vec<SuggestionRequest>>,
    pub fail_with: Option<u16>,
}

#[async_trait]
impl SuggestionService for FakeSuggestions {
    async fn suggest(&self, request: &SuggestionRequest) -> Result<Suggestions, SuggestionError> {
        self.requests.lock().unwrap().push(request.clone());
        if let Some(status) = self.fail_with {
            return Err(SuggestionError::ApiError {
                status,
                message: "model overloaded".to_string(),
            });
        }
        Ok(Suggestions {
            title: format!("Better {}", request.title),
            keywords: vec!["suggested".to_string()],
            ..Default::default()
        })
    }
}

/// Publisher that records requests and returns a fixed external id.
#[derive(Default)]
pub struct FakePublisher {
    pub requests: Mutex<Vec<PublishRequest>>,
    pub fail_with: Option<u16>,
}

#[async_trait]
impl Publisher for FakePublisher {
    async fn publish(&self, request: &PublishRequest) -> Result<PublishedVideo, PublishError> {
        self.requests.lock().unwrap().push(request.clone());
        if let Some(status) = self.fail_with {
            return Err(PublishError::ApiError {
                status,
                body: "quota exceeded".to_string(),
            });
        }
        Ok(PublishedVideo {
            id: "ext-123".to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header("Content-Type", "application/json");
            Body::from(serde_json::to_vec(&json).unwrap())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn patch_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, Method::PATCH, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// POST a raw body with a JSON content type, for payloads `serde_json` would never emit.
pub async fn post_raw_auth(app: Router, uri: &str, body: &'static str, token: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Authorization", format!("Bearer {token}"))
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}
