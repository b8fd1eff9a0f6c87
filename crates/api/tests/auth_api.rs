//! HTTP-level integration tests for signup, login and the authorization gate.

mod common;

use assert_matches::assert_matches;
use axum::http::StatusCode;
use common::{
    body_json, create_user_with_token, get, get_auth, post_json, token_for, TEST_PASSWORD,
};
use cutroom_api::auth::jwt::{generate_token, JwtConfig};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Signup and login
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_signup_returns_user_without_password(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "username": "ana",
        "email": "a@x.com",
        "password": "longenough",
    });
    let response = post_json(app, "/api/v1/auth/signup", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].is_string());
    assert_eq!(json["email"], "a@x.com");
    assert_eq!(json["tier"], "free");
    assert_eq!(json["channels"], serde_json::json!([]));
    assert!(json.get("password").is_none());
    assert!(json.get("password_hash").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_signup_requires_email_and_password(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/auth/signup", serde_json::json!({ "password": "longenough" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/auth/signup", serde_json::json!({ "email": "a@x.com" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_signup_rejects_unknown_tier(pool: PgPool) {
    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "email": "a@x.com",
        "password": "longenough",
        "tier": "gold",
    });
    let response = post_json(app, "/api/v1/auth/signup", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_signup_duplicate_email_conflicts(pool: PgPool) {
    create_user_with_token(&pool, "dup").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": "dup@test.com", "password": "longenough" });
    let response = post_json(app, "/api/v1/auth/signup", body).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_success_returns_usable_token(pool: PgPool) {
    let (user_id, _) = create_user_with_token(&pool, "loginuser").await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "email": "loginuser@test.com", "password": TEST_PASSWORD });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["expires_in"], 24 * 3600);
    assert_eq!(json["user"]["id"], user_id.as_str());
    assert_matches!(json["user"].get("password_hash"), None);
    let token = json["token"].as_str().expect("token must be a string");

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/channels", token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_failures_are_indistinguishable(pool: PgPool) {
    create_user_with_token(&pool, "wrongpw").await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "email": "wrongpw@test.com", "password": "not-the-password" });
    let wrong_password = post_json(app, "/api/v1/auth/login", body).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "email": "ghost@test.com", "password": "whatever1" });
    let unknown_email = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(wrong_password).await, body_json(unknown_email).await);
}

// ---------------------------------------------------------------------------
// Gate
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_header_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/channels").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert_eq!(json["error"], "Authorization header is required");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_bad_signature_is_rejected(pool: PgPool) {
    let (user_id, _) = create_user_with_token(&pool, "forged").await;
    let forged = generate_token(
        &user_id,
        &JwtConfig {
            secret: "some-other-secret".to_string(),
            expiry_hours: 24,
        },
    )
    .unwrap();

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/channels", &forged).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid or expired token");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_expired_token_is_rejected(pool: PgPool) {
    let (user_id, _) = create_user_with_token(&pool, "expired").await;
    let mut config = common::test_jwt_config();
    config.expiry_hours = -1;
    let expired = generate_token(&user_id, &config).unwrap();

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/channels", &expired).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_token_for_deleted_user_is_rejected(pool: PgPool) {
    let token = token_for("no-such-user");

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/channels", &token).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "User not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_malformed_header_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let request = axum::http::Request::builder()
        .uri("/api/v1/channels")
        .header("Authorization", "Token abc")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// The `/users` collection is allow-listed for every method.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_collection_is_public(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/users").await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "email": "open@test.com", "password": "longenough" });
    let response = post_json(app, "/api/v1/users", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_collection_with_trailing_slash_is_public(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/users/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await.is_array());

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "email": "slash@test.com", "password": "longenough" });
    let response = post_json(app, "/api/v1/users/", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

/// Only the collection path is public; a single user still needs a token.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_single_user_requires_token(pool: PgPool) {
    let (user_id, _) = create_user_with_token(&pool, "private").await;
    let app = common::build_test_app(pool);

    let response = get(app, &format!("/api/v1/users/{user_id}")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
