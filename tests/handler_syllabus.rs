mod common;

use axum::http::StatusCode;

use edupath_api::domain::entities::ExamType;

fn seeded() -> common::Fixtures {
    let mut fixtures = common::Fixtures::default();
    fixtures.exams.push(common::exam(1, "JEE", ExamType::Competitive));
    fixtures.courses.push(common::course(1, 1, "jee-full"));
    fixtures.syllabi.push(common::syllabus(1, 1, 1, 2025));
    fixtures
        .subjects
        .push(common::subject(1, 1, "Physics", Some("भौतिकी"), 1));
    fixtures
        .subjects
        .push(common::subject(2, 1, "Chemistry", None, 2));
    fixtures.chapters.push(common::chapter(1, 1, 1, "Kinematics"));
    fixtures.topics.push(common::topic(1, 1, "Projectile Motion"));
    fixtures
}

// ─── SYLLABUS LOOKUP ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_syllabus_lookup() {
    let server = common::make_server(seeded());

    let response = server
        .get("/api/syllabus")
        .add_query_param("examId", "1")
        .add_query_param("courseId", "1")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["data"]["id"], 1);
    assert_eq!(json["data"]["academicYear"], 2025);
}

#[tokio::test]
async fn test_syllabus_latest_year_wins_without_pin() {
    let mut fixtures = seeded();
    fixtures.syllabi.push(common::syllabus(2, 1, 1, 2026));

    let server = common::make_server(fixtures);

    let response = server
        .get("/api/syllabus")
        .add_query_param("examId", "1")
        .add_query_param("courseId", "1")
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>()["data"]["academicYear"],
        2026
    );

    // Pinning the year still finds the older one.
    let response = server
        .get("/api/syllabus")
        .add_query_param("examId", "1")
        .add_query_param("courseId", "1")
        .add_query_param("year", "2025")
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>()["data"]["academicYear"],
        2025
    );
}

#[tokio::test]
async fn test_syllabus_lookup_not_found() {
    let server = common::make_server(common::Fixtures::default());

    let response = server
        .get("/api/syllabus")
        .add_query_param("examId", "9")
        .add_query_param("courseId", "9")
        .await;

    response.assert_status(StatusCode::NOT_FOUND);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], false);
}

// ─── LEVEL LISTINGS ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_subjects_resolve_to_english_by_default() {
    let server = common::make_server(seeded());

    let response = server
        .get("/api/syllabus/subjects")
        .add_query_param("syllabusId", "1")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let items = json["data"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "Physics");
    assert_eq!(items[1]["name"], "Chemistry");
}

#[tokio::test]
async fn test_subjects_resolve_hindi_with_fallback() {
    let server = common::make_server(seeded());

    let response = server
        .get("/api/syllabus/subjects")
        .add_query_param("syllabusId", "1")
        .add_header("x-lang", "hi")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let items = json["data"].as_array().unwrap();
    assert_eq!(items[0]["name"], "भौतिकी");
    // No Hindi name stored, English serves.
    assert_eq!(items[1]["name"], "Chemistry");
}

#[tokio::test]
async fn test_topics_of_a_chapter() {
    let server = common::make_server(seeded());

    let response = server
        .get("/api/syllabus/topics")
        .add_query_param("chapterId", "1")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let items = json["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Projectile Motion");
    assert_eq!(items[0]["difficulty"], "medium");
}

// ─── SIDEBAR ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_sidebar_assembles_full_tree() {
    let server = common::make_server(seeded());

    let response = server
        .get("/api/syllabus/sidebar")
        .add_query_param("examId", "1")
        .add_query_param("courseId", "1")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let subjects = json["data"].as_array().unwrap();
    assert_eq!(subjects.len(), 2);

    let physics = &subjects[0];
    assert_eq!(physics["name"], "Physics");
    let chapters = physics["chapters"].as_array().unwrap();
    assert_eq!(chapters.len(), 1);
    assert_eq!(chapters[0]["name"], "Kinematics");
    assert_eq!(chapters[0]["chapterNumber"], 1);
    assert_eq!(chapters[0]["topics"][0]["name"], "Projectile Motion");

    // Chemistry has no chapters seeded.
    assert_eq!(subjects[1]["chapters"], serde_json::json!([]));
}
