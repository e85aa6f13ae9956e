//! Integration tests for the bulk import endpoints.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use skillboard_store::Store;

use common::{body_json, build_test_app, create_member, create_skill, get, post_json};

#[tokio::test]
async fn import_members_tolerates_bad_rows() {
    let store = Arc::new(Store::new());

    let response = post_json(
        build_test_app(Arc::clone(&store)),
        "/api/import/team-members",
        serde_json::json!({
            "data": [
                {
                    "Name": "Alex Johnson",
                    "Role": "Frontend Developer",
                    "Department": "Engineering",
                    "Email": "alex@example.com",
                },
                // No name column at all; the store rejects the blank.
                {"Role": "Mystery", "Email": "mystery@example.com"},
                {
                    "name": "Jamie Williams",
                    "role": "Backend Developer",
                    "department": "Engineering",
                    "email": "jamie@example.com",
                },
            ]
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(
        json["message"],
        "Imported 2 team members successfully with 1 errors."
    );
    assert_eq!(json["details"]["success"], 2);
    let errors = json["details"]["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["row"], 2);

    let response = get(build_test_app(store), "/api/team-members").await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn import_with_empty_data_is_rejected() {
    let store = Arc::new(Store::new());

    let response = post_json(
        build_test_app(store),
        "/api/import/skills",
        serde_json::json!({"data": []}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn import_skills_accepts_column_synonyms() {
    let store = Arc::new(Store::new());

    let response = post_json(
        build_test_app(Arc::clone(&store)),
        "/api/import/skills",
        serde_json::json!({
            "data": [
                {"Name": "React.js", "Category": "Frontend"},
                {"name": "Docker", "category": "DevOps", "Description": "Containers"},
            ]
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["details"]["success"], 2);

    let response = get(build_test_app(store), "/api/skills").await;
    let skills = body_json(response).await;
    assert_eq!(skills.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn import_ratings_resolves_names_and_text_levels() {
    let store = Arc::new(Store::new());
    create_member(&store, "Alex Johnson", "alex@example.com").await;
    let skill_id = create_skill(&store, "React.js", "Frontend").await;

    let response = post_json(
        build_test_app(Arc::clone(&store)),
        "/api/import/skill-ratings",
        serde_json::json!({
            "data": [
                {
                    "teamMemberName": "alex johnson",
                    "Skill": "React.js",
                    "Level": "Expert",
                    "date": "2024-03-12",
                },
            ]
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["details"]["success"], 1);

    let response = get(
        build_test_app(store),
        &format!("/api/skill-ratings?skillId={skill_id}"),
    )
    .await;
    let ratings = body_json(response).await;
    assert_eq!(ratings[0]["level"], 3);
}

#[tokio::test]
async fn import_ratings_reports_unresolvable_rows() {
    let store = Arc::new(Store::new());
    create_member(&store, "Alex Johnson", "alex@example.com").await;
    create_skill(&store, "React.js", "Frontend").await;

    let response = post_json(
        build_test_app(store),
        "/api/import/skill-ratings",
        serde_json::json!({
            "data": [
                {
                    "teamMemberName": "Alex Johnson",
                    "Skill": "React.js",
                    "Level": 2,
                    "date": "2024-03-12",
                },
                {
                    "teamMemberName": "Nobody In Particular",
                    "Skill": "React.js",
                    "Level": 2,
                    "date": "2024-03-12",
                },
            ]
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["details"]["success"], 1);
    let errors = json["details"]["errors"].as_array().unwrap();
    assert_eq!(errors[0]["row"], 2);
}

#[tokio::test]
async fn import_ratings_clamps_numeric_levels() {
    let store = Arc::new(Store::new());
    let member_id = create_member(&store, "Alex Johnson", "alex@example.com").await;
    let skill_id = create_skill(&store, "React.js", "Frontend").await;

    let response = post_json(
        build_test_app(Arc::clone(&store)),
        "/api/import/skill-ratings",
        serde_json::json!({
            "data": [
                {
                    "teamMemberId": member_id,
                    "skillId": skill_id,
                    "level": 9,
                    "weekOf": "2024-03-12",
                },
            ]
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["details"]["success"], 1);

    let response = get(build_test_app(store), "/api/skill-ratings").await;
    assert_eq!(body_json(response).await[0]["level"], 3);
}
