//! Core business entities.

pub mod access;
pub mod contact;
pub mod coupon;
pub mod course;
pub mod exam;
pub mod paper;
pub mod progress;
pub mod question;
pub mod quiz;
pub mod syllabus;

pub use access::{AccessStatus, CourseAccess, CourseAccessRecord, EXPIRY_WARNING_DAYS};
pub use contact::{ContactMessage, NewContactMessage};
pub use coupon::{Coupon, CouponPatch, NewCoupon};
pub use course::{Course, CoursePatch, CourseType, NewCourse};
pub use exam::{Exam, ExamPatch, ExamType, NewExam};
pub use paper::{Paper, PaperKind};
pub use progress::{NewProgress, Progress};
pub use question::{NewQuestion, Question, QuestionPatch, QuestionType};
pub use quiz::{NewQuiz, Quiz, QuizPatch, QuizType};
pub use syllabus::{
    Chapter, ChapterPatch, Difficulty, NewChapter, NewSubject, NewTopic, Subject, SubjectPatch,
    Syllabus, Topic, TopicPatch,
};
