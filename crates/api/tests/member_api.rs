//! Integration tests for the team member endpoints.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use skillboard_store::Store;

use common::{
    body_json, build_test_app, create_member, create_rating, create_skill, delete, get, post_json,
};

#[tokio::test]
async fn create_and_list_members() {
    let store = Arc::new(Store::new());

    let response = post_json(
        build_test_app(Arc::clone(&store)),
        "/api/team-members",
        serde_json::json!({
            "name": "Alex Johnson",
            "role": "Frontend Developer",
            "department": "Engineering",
            "email": "alex@example.com",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["name"], "Alex Johnson");
    assert_eq!(created["email"], "alex@example.com");
    assert!(created["id"].as_i64().unwrap() >= 1);

    let response = get(build_test_app(store), "/api/team-members").await;
    assert_eq!(response.status(), StatusCode::OK);
    let members = body_json(response).await;
    assert_eq!(members.as_array().unwrap().len(), 1);
    assert_eq!(members[0]["role"], "Frontend Developer");
}

#[tokio::test]
async fn create_member_with_blank_name_is_rejected() {
    let store = Arc::new(Store::new());

    let response = post_json(
        build_test_app(store),
        "/api/team-members",
        serde_json::json!({
            "name": "   ",
            "role": "Engineer",
            "department": "Engineering",
            "email": "blank@example.com",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn duplicate_email_conflicts() {
    let store = Arc::new(Store::new());
    create_member(&store, "Alex Johnson", "alex@example.com").await;

    let response = post_json(
        build_test_app(store),
        "/api/team-members",
        serde_json::json!({
            "name": "Another Alex",
            "role": "Engineer",
            "department": "Engineering",
            "email": "ALEX@example.com",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn delete_member_cascades_to_ratings() {
    let store = Arc::new(Store::new());
    let member_id = create_member(&store, "Jamie Williams", "jamie@example.com").await;
    let skill_id = create_skill(&store, "React.js", "Frontend").await;
    create_rating(&store, member_id, skill_id, 2, "2024-03-10T00:00:00Z").await;

    let response = delete(
        build_test_app(Arc::clone(&store)),
        &format!("/api/team-members/{member_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(build_test_app(Arc::clone(&store)), "/api/skill-ratings").await;
    let ratings = body_json(response).await;
    assert!(ratings.as_array().unwrap().is_empty());

    // The skill itself is untouched.
    let response = get(build_test_app(store), "/api/skills").await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn delete_missing_member_returns_404() {
    let store = Arc::new(Store::new());

    let response = delete(build_test_app(store), "/api/team-members/999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn non_numeric_member_id_is_a_client_error() {
    let store = Arc::new(Store::new());

    let response = delete(build_test_app(store), "/api/team-members/abc").await;

    assert!(response.status().is_client_error());
}
