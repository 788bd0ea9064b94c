//! API route configuration, grouped by access policy.
//!
//! Each group maps to one [`crate::api::policy::RouteGroup`]; the role guard
//! is applied per group in [`crate::routes::app_router`].

use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::api::handlers::{
    contact, coupon, course, dashboard, exam, library, paper, progress, question, quiz, syllabus,
};
use crate::state::AppState;

/// Unauthenticated catalog reads and the contact form.
///
/// # Endpoints
///
/// - `GET  /exam/public`          - Active exams
/// - `GET  /course`               - Courses of an exam
/// - `POST /course/byslug`        - Course lookup by slug
/// - `GET  /syllabus`             - Active syllabus for exam + course
/// - `GET  /syllabus/subjects`    - Subjects of a syllabus
/// - `GET  /syllabus/chapters`    - Chapters of a subject
/// - `GET  /syllabus/topics`      - Topics of a chapter
/// - `GET  /syllabus/sidebar`     - Whole tree for navigation
/// - `GET  /question`             - Questions of a topic
/// - `GET  /quiz`                 - Quiz listing
/// - `GET  /quiz/{id}`            - One quiz
/// - `GET  /previous-papers`      - Previous-year papers
/// - `GET  /solved-papers`        - Solved papers
/// - `POST /contact`              - Contact form submission
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/exam/public", get(exam::list_public_handler))
        .route("/course", get(course::list_handler))
        .route("/course/byslug", post(course::by_slug_handler))
        .route("/syllabus", get(syllabus::get_handler))
        .route("/syllabus/subjects", get(syllabus::subjects_handler))
        .route("/syllabus/chapters", get(syllabus::chapters_handler))
        .route("/syllabus/topics", get(syllabus::topics_handler))
        .route("/syllabus/sidebar", get(syllabus::sidebar_handler))
        .route("/question", get(question::list_handler))
        .route("/quiz", get(quiz::list_handler))
        .route("/quiz/{id}", get(quiz::get_handler))
        .route("/previous-papers", get(paper::list_previous_handler))
        .route("/solved-papers", get(paper::list_solved_handler))
        .route("/contact", post(contact::submit_handler))
}

/// Per-user routes; any authenticated role.
///
/// # Endpoints
///
/// - `GET  /dashboard/syllabus`              - Current course with syllabus tree
/// - `GET  /user/courses`                    - The caller's course library
/// - `POST /progress`                        - Upsert progress
/// - `GET  /progress`                        - List the caller's progress
/// - `GET  /previous-papers/{id}/download`   - Tracked paper download
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard/syllabus", get(dashboard::syllabus_handler))
        .route("/user/courses", get(library::list_handler))
        .route(
            "/progress",
            get(progress::list_handler).post(progress::upsert_handler),
        )
        .route(
            "/previous-papers/{id}/download",
            get(paper::download_handler),
        )
}

/// Content management; admins and teachers.
///
/// # Endpoints
///
/// - `POST  /admin/subjects`        - Create subject
/// - `PATCH /admin/subjects/{id}`   - Update subject
/// - `POST  /admin/chapters`        - Create chapter
/// - `PATCH /admin/chapters/{id}`   - Update chapter
/// - `POST  /admin/topics`          - Create topic
/// - `PATCH /admin/topics/{id}`     - Update topic
/// - `POST  /admin/questions`       - Create question
/// - `PATCH /admin/questions/{id}`  - Update question
/// - `POST  /admin/quizzes`         - Create quiz
/// - `PATCH /admin/quizzes/{id}`    - Update quiz
pub fn content_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/subjects", post(syllabus::create_subject_handler))
        .route(
            "/admin/subjects/{id}",
            patch(syllabus::update_subject_handler),
        )
        .route("/admin/chapters", post(syllabus::create_chapter_handler))
        .route(
            "/admin/chapters/{id}",
            patch(syllabus::update_chapter_handler),
        )
        .route("/admin/topics", post(syllabus::create_topic_handler))
        .route("/admin/topics/{id}", patch(syllabus::update_topic_handler))
        .route("/admin/questions", post(question::create_handler))
        .route(
            "/admin/questions/{id}",
            patch(question::update_handler),
        )
        .route("/admin/quizzes", post(quiz::create_handler))
        .route("/admin/quizzes/{id}", patch(quiz::update_handler))
}

/// Platform administration; admins only.
///
/// # Endpoints
///
/// - `GET    /admin/exams`          - Paginated exam listing with search
/// - `POST   /admin/exams`          - Create exam
/// - `PATCH  /admin/exams/{id}`     - Update exam
/// - `DELETE /admin/exams/{id}`     - Soft-delete exam
/// - `POST   /admin/courses`        - Create course
/// - `PATCH  /admin/courses/{id}`   - Update course
/// - `DELETE /admin/courses/{id}`   - Soft-delete course
/// - `GET    /admin/coupons`        - Coupon listing
/// - `POST   /admin/coupons`        - Create coupon
/// - `PATCH  /admin/coupons/{id}`   - Update coupon
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/admin/exams",
            get(exam::list_admin_handler).post(exam::create_handler),
        )
        .route(
            "/admin/exams/{id}",
            patch(exam::update_handler).delete(exam::delete_handler),
        )
        .route("/admin/courses", post(course::create_handler))
        .route(
            "/admin/courses/{id}",
            patch(course::update_handler).delete(course::delete_handler),
        )
        .route(
            "/admin/coupons",
            get(coupon::list_handler).post(coupon::create_handler),
        )
        .route("/admin/coupons/{id}", patch(coupon::update_handler))
}
