#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use skillboard_api::config::ServerConfig;
use skillboard_api::router::build_app_router;
use skillboard_api::state::AppState;
use skillboard_store::Store;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout. Demo seeding is off; tests create the
/// data they need.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        seed_demo_data: false,
    }
}

/// Build the full application router with all middleware layers around the
/// given store.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses. Routers are cheap to rebuild, so
/// tests construct one per request against a shared store.
pub fn build_test_app(store: Arc<Store>) -> Router {
    let config = test_config();
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    json_request(app, Method::POST, uri, body).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    json_request(app, Method::PATCH, uri, body).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn json_request(app: Router, method: Method, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a member via the API and return its id.
pub async fn create_member(store: &Arc<Store>, name: &str, email: &str) -> i64 {
    let response = post_json(
        build_test_app(Arc::clone(store)),
        "/api/team-members",
        serde_json::json!({
            "name": name,
            "role": "Engineer",
            "department": "Engineering",
            "email": email,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a skill via the API and return its id.
pub async fn create_skill(store: &Arc<Store>, name: &str, category: &str) -> i64 {
    let response = post_json(
        build_test_app(Arc::clone(store)),
        "/api/skills",
        serde_json::json!({"name": name, "category": category}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a rating via the API and return its id.
pub async fn create_rating(
    store: &Arc<Store>,
    member_id: i64,
    skill_id: i64,
    level: i64,
    week_of: &str,
) -> i64 {
    let response = post_json(
        build_test_app(Arc::clone(store)),
        "/api/skill-ratings",
        serde_json::json!({
            "teamMemberId": member_id,
            "skillId": skill_id,
            "level": level,
            "weekOf": week_of,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}
