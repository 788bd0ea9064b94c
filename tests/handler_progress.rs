mod common;

use axum::http::StatusCode;
use serde_json::json;

// ─── UPSERT ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_progress_upsert() {
    let server = common::make_server(common::Fixtures::default());

    let response = server
        .post("/api/progress")
        .add_header("x-user-id", "u-1")
        .json(&json!({ "subjectId": 1, "chapterId": 2, "percent": 40 }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["data"]["subjectId"], 1);
    assert_eq!(json["data"]["chapterId"], 2);
    assert_eq!(json["data"]["percent"], 40);
}

#[tokio::test]
async fn test_progress_upsert_overwrites_same_position() {
    let server = common::make_server(common::Fixtures::default());

    for percent in [40, 85] {
        server
            .post("/api/progress")
            .add_header("x-user-id", "u-1")
            .json(&json!({ "subjectId": 1, "chapterId": 2, "percent": percent }))
            .await
            .assert_status_ok();
    }

    let response = server
        .get("/api/progress")
        .add_header("x-user-id", "u-1")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["percent"], 85);
}

#[tokio::test]
async fn test_progress_topic_requires_chapter() {
    let server = common::make_server(common::Fixtures::default());

    let response = server
        .post("/api/progress")
        .add_header("x-user-id", "u-1")
        .json(&json!({ "subjectId": 1, "topicId": 3, "percent": 10 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn test_progress_percent_out_of_range() {
    let server = common::make_server(common::Fixtures::default());

    let response = server
        .post("/api/progress")
        .add_header("x-user-id", "u-1")
        .json(&json!({ "subjectId": 1, "percent": 101 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

// ─── LIST ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_progress_list_scoped_to_caller() {
    let server = common::make_server(common::Fixtures::default());

    server
        .post("/api/progress")
        .add_header("x-user-id", "u-1")
        .json(&json!({ "subjectId": 1, "percent": 50 }))
        .await
        .assert_status_ok();

    let response = server
        .get("/api/progress")
        .add_header("x-user-id", "u-2")
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["data"], json!([]));
}

#[tokio::test]
async fn test_progress_list_filters_by_subject() {
    let server = common::make_server(common::Fixtures::default());

    for subject_id in [1, 2] {
        server
            .post("/api/progress")
            .add_header("x-user-id", "u-1")
            .json(&json!({ "subjectId": subject_id, "percent": 30 }))
            .await
            .assert_status_ok();
    }

    let response = server
        .get("/api/progress")
        .add_query_param("subjectId", "2")
        .add_header("x-user-id", "u-1")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["subjectId"], 2);
}
