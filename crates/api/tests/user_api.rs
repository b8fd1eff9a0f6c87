//! HTTP-level integration tests for the `/users` resource.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_user_with_token, delete_auth, get, get_auth, patch_json_auth,
    post_json_auth,
};
use cutroom_db::repositories::{ChannelRepo, UserRepo};
use sqlx::PgPool;

async fn create_channel(pool: &PgPool, token: &str, name: &str) -> String {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/channels",
        serde_json::json!({ "name": name, "api_key": "k" }),
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_str().unwrap().to_string()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_users_is_public_and_hides_passwords(pool: PgPool) {
    create_user_with_token(&pool, "first").await;
    create_user_with_token(&pool, "second").await;
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/users").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let users = json.as_array().unwrap();
    assert_eq!(users.len(), 2);
    for user in users {
        assert!(user.get("password_hash").is_none());
        assert!(user["channels"].is_array());
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_user_embeds_channels_without_owner(pool: PgPool) {
    let (user_id, token) = create_user_with_token(&pool, "owner").await;
    let channel_id = create_channel(&pool, &token, "Main").await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, &format!("/api/v1/users/{user_id}"), &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["channels"][0]["id"], channel_id.as_str());
    assert!(json["channels"][0].get("owner").is_none());
    assert!(json["channels"][0].get("videos").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_missing_user_is_404(pool: PgPool) {
    let (_, token) = create_user_with_token(&pool, "seeker").await;
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/users/nope", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_patch_self_applies_only_non_zero_fields(pool: PgPool) {
    let (user_id, token) = create_user_with_token(&pool, "patcher").await;

    let app = common::build_test_app(pool.clone());
    let response = patch_json_auth(
        app,
        &format!("/api/v1/users/{user_id}"),
        serde_json::json!({ "tier": "premium", "trial": true }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["tier"], "premium");
    assert_eq!(json["trial"], true);
    assert_eq!(json["username"], "patcher");

    // `false` is the zero value and cannot switch trial back off.
    let app = common::build_test_app(pool);
    let response = patch_json_auth(
        app,
        &format!("/api/v1/users/{user_id}"),
        serde_json::json!({ "trial": false }),
        &token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["trial"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_patch_other_user_is_forbidden(pool: PgPool) {
    let (victim_id, _) = create_user_with_token(&pool, "victim").await;
    let (_, token) = create_user_with_token(&pool, "intruder").await;
    let app = common::build_test_app(pool);

    let response = patch_json_auth(
        app,
        &format!("/api/v1/users/{victim_id}"),
        serde_json::json!({ "tier": "premium" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_user_cascades_channels(pool: PgPool) {
    let (user_id, token) = create_user_with_token(&pool, "leaver").await;
    let first = create_channel(&pool, &token, "One").await;
    let second = create_channel(&pool, &token, "Two").await;

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/users/{user_id}"), &token).await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(UserRepo::find_by_id(&pool, &user_id).await.unwrap().is_none());
    assert!(ChannelRepo::find_by_id(&pool, &first).await.unwrap().is_none());
    assert!(ChannelRepo::find_by_id(&pool, &second).await.unwrap().is_none());
}

/// A channel that still has videos blocks the cascade. Channels deleted
/// before the failure stay deleted and the user survives.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_user_partial_cascade_is_not_rolled_back(pool: PgPool) {
    let (user_id, token) = create_user_with_token(&pool, "stuck").await;
    let empty = create_channel(&pool, &token, "Empty").await;
    let busy = create_channel(&pool, &token, "Busy").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/videos",
        serde_json::json!({ "channel_id": busy, "title": "Keeps the channel alive" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/users/{user_id}"), &token).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert!(UserRepo::find_by_id(&pool, &user_id).await.unwrap().is_some());
    assert!(ChannelRepo::find_by_id(&pool, &empty).await.unwrap().is_none());
    assert!(ChannelRepo::find_by_id(&pool, &busy).await.unwrap().is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_other_user_is_forbidden(pool: PgPool) {
    let (victim_id, _) = create_user_with_token(&pool, "target").await;
    let (_, token) = create_user_with_token(&pool, "attacker").await;

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/users/{victim_id}"), &token).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(UserRepo::find_by_id(&pool, &victim_id).await.unwrap().is_some());
}
