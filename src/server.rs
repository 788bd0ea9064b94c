//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, repository and service wiring, and the Axum
//! server lifecycle.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

use crate::application::services::{
    AccessService, ContactService, CouponService, CourseService, DashboardService, ExamService,
    PaperService, ProgressService, QuestionService, QuizService, SyllabusService,
};
use crate::config::Config;
use crate::infrastructure::persistence::{
    PgAccessRepository, PgContactRepository, PgCouponRepository, PgCourseRepository,
    PgExamRepository, PgPaperRepository, PgProgressRepository, PgQuestionRepository,
    PgQuizRepository, PgSyllabusRepository,
};
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Migrations
/// - Repository and service graph
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if the database connection, migrations, or the server
/// bind fail.
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Migrations applied");

    let pool = Arc::new(pool);

    let exam_repository = Arc::new(PgExamRepository::new(pool.clone()));
    let course_repository = Arc::new(PgCourseRepository::new(pool.clone()));
    let syllabus_repository = Arc::new(PgSyllabusRepository::new(pool.clone()));
    let question_repository = Arc::new(PgQuestionRepository::new(pool.clone()));
    let quiz_repository = Arc::new(PgQuizRepository::new(pool.clone()));
    let access_repository = Arc::new(PgAccessRepository::new(pool.clone()));
    let progress_repository = Arc::new(PgProgressRepository::new(pool.clone()));
    let coupon_repository = Arc::new(PgCouponRepository::new(pool.clone()));
    let contact_repository = Arc::new(PgContactRepository::new(pool.clone()));
    let paper_repository = Arc::new(PgPaperRepository::new(pool.clone()));

    let state = AppState {
        db: pool.clone(),
        exam_service: Arc::new(ExamService::new(exam_repository)),
        course_service: Arc::new(CourseService::new(course_repository.clone())),
        syllabus_service: Arc::new(SyllabusService::new(syllabus_repository.clone())),
        question_service: Arc::new(QuestionService::new(question_repository)),
        quiz_service: Arc::new(QuizService::new(quiz_repository)),
        access_service: Arc::new(AccessService::new(access_repository.clone())),
        dashboard_service: Arc::new(DashboardService::new(
            access_repository,
            course_repository,
            syllabus_repository,
        )),
        progress_service: Arc::new(ProgressService::new(progress_repository)),
        coupon_service: Arc::new(CouponService::new(coupon_repository)),
        contact_service: Arc::new(ContactService::new(
            contact_repository,
            config.mail.clone(),
        )),
        paper_service: Arc::new(PaperService::new(paper_repository)),
    };

    // Normalization must wrap the router so it runs before route matching.
    let app = NormalizePathLayer::trim_trailing_slash().layer(app_router(state));

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
