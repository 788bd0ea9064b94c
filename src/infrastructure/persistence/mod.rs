//! PostgreSQL repository implementations.

mod pg_access_repository;
mod pg_contact_repository;
mod pg_coupon_repository;
mod pg_course_repository;
mod pg_exam_repository;
mod pg_paper_repository;
mod pg_progress_repository;
mod pg_question_repository;
mod pg_quiz_repository;
mod pg_syllabus_repository;

pub use pg_access_repository::PgAccessRepository;
pub use pg_contact_repository::PgContactRepository;
pub use pg_coupon_repository::PgCouponRepository;
pub use pg_course_repository::PgCourseRepository;
pub use pg_exam_repository::PgExamRepository;
pub use pg_paper_repository::PgPaperRepository;
pub use pg_progress_repository::PgProgressRepository;
pub use pg_question_repository::PgQuestionRepository;
pub use pg_quiz_repository::PgQuizRepository;
pub use pg_syllabus_repository::PgSyllabusRepository;

/// Soft-delete predicate appended to every read query.
///
/// Defined once so the filter cannot drift between call sites; "deletion" is
/// a flag flip, reads must never see flagged rows.
pub(crate) const NOT_DELETED: &str = "deleted_at IS NULL";
