//! Application services orchestrating repositories behind the HTTP layer.

pub mod access_service;
pub mod contact_service;
pub mod coupon_service;
pub mod course_service;
pub mod dashboard_service;
pub mod exam_service;
pub mod paper_service;
pub mod progress_service;
pub mod question_service;
pub mod quiz_service;
pub mod syllabus_service;

pub use access_service::AccessService;
pub use contact_service::ContactService;
pub use coupon_service::CouponService;
pub use course_service::CourseService;
pub use dashboard_service::{DashboardData, DashboardService};
pub use exam_service::ExamService;
pub use paper_service::PaperService;
pub use progress_service::ProgressService;
pub use question_service::QuestionService;
pub use quiz_service::QuizService;
pub use syllabus_service::{SyllabusContent, SyllabusService};
