//! Repository traits decoupling services from the storage backend.

pub mod access_repository;
pub mod contact_repository;
pub mod coupon_repository;
pub mod course_repository;
pub mod exam_repository;
pub mod paper_repository;
pub mod progress_repository;
pub mod question_repository;
pub mod quiz_repository;
pub mod syllabus_repository;

pub use access_repository::AccessRepository;
pub use contact_repository::ContactRepository;
pub use coupon_repository::CouponRepository;
pub use course_repository::CourseRepository;
pub use exam_repository::ExamRepository;
pub use paper_repository::PaperRepository;
pub use progress_repository::ProgressRepository;
pub use question_repository::QuestionRepository;
pub use quiz_repository::QuizRepository;
pub use syllabus_repository::SyllabusRepository;

#[cfg(test)]
pub use access_repository::MockAccessRepository;
#[cfg(test)]
pub use contact_repository::MockContactRepository;
#[cfg(test)]
pub use coupon_repository::MockCouponRepository;
#[cfg(test)]
pub use course_repository::MockCourseRepository;
#[cfg(test)]
pub use exam_repository::MockExamRepository;
#[cfg(test)]
pub use paper_repository::MockPaperRepository;
#[cfg(test)]
pub use progress_repository::MockProgressRepository;
#[cfg(test)]
pub use question_repository::MockQuestionRepository;
#[cfg(test)]
pub use quiz_repository::MockQuizRepository;
#[cfg(test)]
pub use syllabus_repository::MockSyllabusRepository;
