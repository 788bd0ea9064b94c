mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};

use edupath_api::domain::entities::ExamType;

fn seeded() -> common::Fixtures {
    let mut fixtures = common::Fixtures::default();
    fixtures.exams.push(common::exam(1, "JEE", ExamType::Competitive));
    fixtures.courses.push(common::course(1, 1, "jee-full"));
    fixtures.syllabi.push(common::syllabus(1, 1, 1, 2025));
    fixtures
        .subjects
        .push(common::subject(1, 1, "Physics", Some("भौतिकी"), 1));
    fixtures.chapters.push(common::chapter(1, 1, 1, "Kinematics"));
    fixtures.topics.push(common::topic(1, 1, "Projectile Motion"));
    fixtures
}

// ─── DASHBOARD ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_dashboard_without_identity_is_unauthorized() {
    let server = common::make_server(seeded());

    let response = server.get("/api/dashboard/syllabus").await;

    response.assert_status(StatusCode::UNAUTHORIZED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], false);
    assert_eq!(json["statusCode"], 401);
}

#[tokio::test]
async fn test_dashboard_without_access_is_not_found() {
    let server = common::make_server(seeded());

    let response = server
        .get("/api/dashboard/syllabus")
        .add_header("x-user-id", "u-1")
        .await;

    response.assert_status(StatusCode::NOT_FOUND);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "No active course access");
}

#[tokio::test]
async fn test_dashboard_expired_access_is_not_found() {
    let mut fixtures = seeded();
    let course = fixtures.courses[0].clone();
    let mut record = common::lifetime_access("u-1", &course);
    record.access.lifetime = false;
    record.access.expires_at = Some(Utc::now() - Duration::days(1));
    fixtures.access.push(record);

    let server = common::make_server(fixtures);

    let response = server
        .get("/api/dashboard/syllabus")
        .add_header("x-user-id", "u-1")
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_dashboard_composes_course_and_tree() {
    let mut fixtures = seeded();
    let course = fixtures.courses[0].clone();
    fixtures.access.push(common::lifetime_access("u-1", &course));

    let server = common::make_server(fixtures);

    let response = server
        .get("/api/dashboard/syllabus")
        .add_header("x-user-id", "u-1")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let data = &json["data"];

    assert_eq!(data["course"]["slug"], "jee-full");
    assert_eq!(data["accessStatus"], "LIFETIME");
    assert_eq!(data["syllabus"]["academicYear"], 2025);

    let sidebar = data["sidebar"].as_array().unwrap();
    assert_eq!(sidebar.len(), 1);
    assert_eq!(sidebar[0]["name"], "Physics");
    assert_eq!(sidebar[0]["chapters"][0]["topics"][0]["name"], "Projectile Motion");
}

#[tokio::test]
async fn test_dashboard_resolves_language() {
    let mut fixtures = seeded();
    let course = fixtures.courses[0].clone();
    fixtures.access.push(common::lifetime_access("u-1", &course));

    let server = common::make_server(fixtures);

    let response = server
        .get("/api/dashboard/syllabus")
        .add_header("x-user-id", "u-1")
        .add_header("x-lang", "hi")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["data"]["sidebar"][0]["name"], "भौतिकी");
}

#[tokio::test]
async fn test_dashboard_expiring_access_status() {
    let mut fixtures = seeded();
    let course = fixtures.courses[0].clone();
    let mut record = common::lifetime_access("u-1", &course);
    record.access.lifetime = false;
    record.access.expires_at = Some(Utc::now() + Duration::days(3));
    fixtures.access.push(record);

    let server = common::make_server(fixtures);

    let response = server
        .get("/api/dashboard/syllabus")
        .add_header("x-user-id", "u-1")
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>()["data"]["accessStatus"],
        "EXPIRING"
    );
}
