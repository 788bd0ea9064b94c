//! Shared application state injected into every handler.

use std::sync::Arc;

use sqlx::PgPool;

use crate::application::services::{
    AccessService, ContactService, CouponService, CourseService, DashboardService, ExamService,
    PaperService, ProgressService, QuestionService, QuizService, SyllabusService,
};

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<PgPool>,
    pub exam_service: Arc<ExamService>,
    pub course_service: Arc<CourseService>,
    pub syllabus_service: Arc<SyllabusService>,
    pub question_service: Arc<QuestionService>,
    pub quiz_service: Arc<QuizService>,
    pub access_service: Arc<AccessService>,
    pub dashboard_service: Arc<DashboardService>,
    pub progress_service: Arc<ProgressService>,
    pub coupon_service: Arc<CouponService>,
    pub contact_service: Arc<ContactService>,
    pub paper_service: Arc<PaperService>,
}
