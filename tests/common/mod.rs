//! Shared fixtures: in-memory repositories and app wiring for handler tests.
//!
//! The fakes implement the repository traits over plain vectors so handler
//! behavior can be exercised without a database.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use sqlx::PgPool;

use edupath_api::application::services::{
    AccessService, ContactService, CouponService, CourseService, DashboardService, ExamService,
    PaperService, ProgressService, QuestionService, QuizService, SyllabusService,
};
use edupath_api::config::MailConfig;
use edupath_api::domain::entities::*;
use edupath_api::domain::lang::LocalizedText;
use edupath_api::domain::repositories::*;
use edupath_api::error::AppError;
use edupath_api::routes::app_router;
use edupath_api::state::AppState;

/// Seed data for the in-memory repositories.
#[derive(Default)]
pub struct Fixtures {
    pub exams: Vec<Exam>,
    pub courses: Vec<Course>,
    pub syllabi: Vec<Syllabus>,
    pub subjects: Vec<Subject>,
    pub chapters: Vec<Chapter>,
    pub topics: Vec<Topic>,
    pub questions: Vec<Question>,
    pub quizzes: Vec<Quiz>,
    pub access: Vec<CourseAccessRecord>,
    pub coupons: Vec<Coupon>,
    pub papers: Vec<Paper>,
}

pub struct FakeExamRepository {
    exams: Mutex<Vec<Exam>>,
}

#[async_trait]
impl ExamRepository for FakeExamRepository {
    async fn list_public(&self) -> Result<Vec<Exam>, AppError> {
        let mut exams: Vec<Exam> = self
            .exams
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.is_active && e.deleted_at.is_none())
            .cloned()
            .collect();
        exams.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(exams)
    }

    async fn list(
        &self,
        offset: i64,
        limit: i64,
        search: Option<String>,
    ) -> Result<Vec<Exam>, AppError> {
        let needle = search.map(|s| s.to_lowercase());
        Ok(self
            .exams
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.deleted_at.is_none())
            .filter(|e| {
                needle
                    .as_ref()
                    .is_none_or(|n| e.name.to_lowercase().contains(n))
            })
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Exam>, AppError> {
        Ok(self
            .exams
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == id && e.deleted_at.is_none())
            .cloned())
    }

    async fn create(&self, new_exam: NewExam) -> Result<Exam, AppError> {
        let mut exams = self.exams.lock().unwrap();
        let exam = Exam {
            id: exams.iter().map(|e| e.id).max().unwrap_or(0) + 1,
            name: new_exam.name,
            exam_type: new_exam.exam_type,
            conducted_by: new_exam.conducted_by,
            is_active: new_exam.is_active,
            created_at: Utc::now(),
            deleted_at: None,
        };
        exams.push(exam.clone());
        Ok(exam)
    }

    async fn update(&self, id: i64, patch: ExamPatch) -> Result<Exam, AppError> {
        let mut exams = self.exams.lock().unwrap();
        let exam = exams
            .iter_mut()
            .find(|e| e.id == id && e.deleted_at.is_none())
            .ok_or_else(|| AppError::not_found("Exam not found", json!({ "id": id })))?;
        if let Some(name) = patch.name {
            exam.name = name;
        }
        if let Some(exam_type) = patch.exam_type {
            exam.exam_type = exam_type;
        }
        if let Some(conducted_by) = patch.conducted_by {
            exam.conducted_by = Some(conducted_by);
        }
        if let Some(is_active) = patch.is_active {
            exam.is_active = is_active;
        }
        Ok(exam.clone())
    }

    async fn soft_delete(&self, id: i64) -> Result<bool, AppError> {
        let mut exams = self.exams.lock().unwrap();
        match exams
            .iter_mut()
            .find(|e| e.id == id && e.deleted_at.is_none())
        {
            Some(exam) => {
                exam.deleted_at = Some(Utc::now());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

pub struct FakeCourseRepository {
    courses: Mutex<Vec<Course>>,
}

#[async_trait]
impl CourseRepository for FakeCourseRepository {
    async fn list_for_exam(&self, exam_id: i64) -> Result<Vec<Course>, AppError> {
        Ok(self
            .courses
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.exam_id == exam_id && c.is_active && c.deleted_at.is_none())
            .cloned()
            .collect())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Course>, AppError> {
        Ok(self
            .courses
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.slug == slug && c.deleted_at.is_none())
            .cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, AppError> {
        Ok(self
            .courses
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id && c.deleted_at.is_none())
            .cloned())
    }

    async fn create(&self, new_course: NewCourse) -> Result<Course, AppError> {
        let mut courses = self.courses.lock().unwrap();
        if courses
            .iter()
            .any(|c| c.slug == new_course.slug && c.deleted_at.is_none())
        {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "slug": new_course.slug }),
            ));
        }
        let course = Course {
            id: courses.iter().map(|c| c.id).max().unwrap_or(0) + 1,
            exam_id: new_course.exam_id,
            name: new_course.name,
            slug: new_course.slug,
            course_type: new_course.course_type,
            base_price: new_course.base_price,
            sale_price: new_course.sale_price,
            currency: new_course.currency,
            is_free: new_course.is_free,
            is_active: new_course.is_active,
            created_at: Utc::now(),
            deleted_at: None,
        };
        courses.push(course.clone());
        Ok(course)
    }

    async fn update(&self, id: i64, patch: CoursePatch) -> Result<Course, AppError> {
        let mut courses = self.courses.lock().unwrap();
        let course = courses
            .iter_mut()
            .find(|c| c.id == id && c.deleted_at.is_none())
            .ok_or_else(|| AppError::not_found("Course not found", json!({ "id": id })))?;
        if let Some(name) = patch.name {
            course.name = name;
        }
        if let Some(course_type) = patch.course_type {
            course.course_type = course_type;
        }
        if let Some(base_price) = patch.base_price {
            course.base_price = base_price;
        }
        if let Some(sale_price) = patch.sale_price {
            course.sale_price = sale_price;
        }
        if let Some(is_free) = patch.is_free {
            course.is_free = is_free;
        }
        if let Some(is_active) = patch.is_active {
            course.is_active = is_active;
        }
        Ok(course.clone())
    }

    async fn soft_delete(&self, id: i64) -> Result<bool, AppError> {
        let mut courses = self.courses.lock().unwrap();
        match courses
            .iter_mut()
            .find(|c| c.id == id && c.deleted_at.is_none())
        {
            Some(course) => {
                course.deleted_at = Some(Utc::now());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

pub struct FakeSyllabusRepository {
    syllabi: Mutex<Vec<Syllabus>>,
    subjects: Mutex<Vec<Subject>>,
    chapters: Mutex<Vec<Chapter>>,
    topics: Mutex<Vec<Topic>>,
}

#[async_trait]
impl SyllabusRepository for FakeSyllabusRepository {
    async fn find_active(
        &self,
        exam_id: i64,
        course_id: i64,
        academic_year: Option<i32>,
    ) -> Result<Option<Syllabus>, AppError> {
        let mut matches: Vec<Syllabus> = self
            .syllabi
            .lock()
            .unwrap()
            .iter()
            .filter(|s| {
                s.exam_id == exam_id
                    && s.course_id == course_id
                    && s.is_active
                    && s.deleted_at.is_none()
                    && academic_year.is_none_or(|y| s.academic_year == y)
            })
            .cloned()
            .collect();
        matches.sort_by_key(|s| std::cmp::Reverse(s.academic_year));
        Ok(matches.into_iter().next())
    }

    async fn list_subjects(&self, syllabus_id: i64) -> Result<Vec<Subject>, AppError> {
        let mut subjects: Vec<Subject> = self
            .subjects
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.syllabus_id == syllabus_id && s.is_active && s.deleted_at.is_none())
            .cloned()
            .collect();
        subjects.sort_by_key(|s| s.order);
        Ok(subjects)
    }

    async fn list_chapters(&self, subject_id: i64) -> Result<Vec<Chapter>, AppError> {
        let mut chapters: Vec<Chapter> = self
            .chapters
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.subject_id == subject_id && c.deleted_at.is_none())
            .cloned()
            .collect();
        chapters.sort_by_key(|c| c.order);
        Ok(chapters)
    }

    async fn list_topics(&self, chapter_id: i64) -> Result<Vec<Topic>, AppError> {
        Ok(self
            .topics
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.chapter_id == chapter_id && t.deleted_at.is_none())
            .cloned()
            .collect())
    }

    async fn list_chapters_for_syllabus(
        &self,
        syllabus_id: i64,
    ) -> Result<Vec<Chapter>, AppError> {
        let subject_ids: Vec<i64> = self
            .list_subjects(syllabus_id)
            .await?
            .into_iter()
            .map(|s| s.id)
            .collect();
        let mut chapters: Vec<Chapter> = self
            .chapters
            .lock()
            .unwrap()
            .iter()
            .filter(|c| subject_ids.contains(&c.subject_id) && c.deleted_at.is_none())
            .cloned()
            .collect();
        chapters.sort_by_key(|c| c.order);
        Ok(chapters)
    }

    async fn list_topics_for_syllabus(&self, syllabus_id: i64) -> Result<Vec<Topic>, AppError> {
        let chapter_ids: Vec<i64> = self
            .list_chapters_for_syllabus(syllabus_id)
            .await?
            .into_iter()
            .map(|c| c.id)
            .collect();
        Ok(self
            .topics
            .lock()
            .unwrap()
            .iter()
            .filter(|t| chapter_ids.contains(&t.chapter_id) && t.deleted_at.is_none())
            .cloned()
            .collect())
    }

    async fn create_subject(&self, new_subject: NewSubject) -> Result<Subject, AppError> {
        let mut subjects = self.subjects.lock().unwrap();
        let subject = Subject {
            id: subjects.iter().map(|s| s.id).max().unwrap_or(0) + 1,
            syllabus_id: new_subject.syllabus_id,
            name: new_subject.name,
            order: new_subject.order,
            is_active: new_subject.is_active,
            deleted_at: None,
        };
        subjects.push(subject.clone());
        Ok(subject)
    }

    async fn update_subject(&self, id: i64, patch: SubjectPatch) -> Result<Subject, AppError> {
        let mut subjects = self.subjects.lock().unwrap();
        let subject = subjects
            .iter_mut()
            .find(|s| s.id == id && s.deleted_at.is_none())
            .ok_or_else(|| AppError::not_found("Subject not found", json!({ "id": id })))?;
        if let Some(name) = patch.name {
            subject.name = name;
        }
        if let Some(order) = patch.order {
            subject.order = order;
        }
        if let Some(is_active) = patch.is_active {
            subject.is_active = is_active;
        }
        Ok(subject.clone())
    }

    async fn create_chapter(&self, new_chapter: NewChapter) -> Result<Chapter, AppError> {
        let mut chapters = self.chapters.lock().unwrap();
        let chapter = Chapter {
            id: chapters.iter().map(|c| c.id).max().unwrap_or(0) + 1,
            subject_id: new_chapter.subject_id,
            chapter_number: new_chapter.chapter_number,
            name: new_chapter.name,
            order: new_chapter.order,
            deleted_at: None,
        };
        chapters.push(chapter.clone());
        Ok(chapter)
    }

    async fn update_chapter(&self, id: i64, patch: ChapterPatch) -> Result<Chapter, AppError> {
        let mut chapters = self.chapters.lock().unwrap();
        let chapter = chapters
            .iter_mut()
            .find(|c| c.id == id && c.deleted_at.is_none())
            .ok_or_else(|| AppError::not_found("Chapter not found", json!({ "id": id })))?;
        if let Some(chapter_number) = patch.chapter_number {
            chapter.chapter_number = chapter_number;
        }
        if let Some(name) = patch.name {
            chapter.name = name;
        }
        if let Some(order) = patch.order {
            chapter.order = order;
        }
        Ok(chapter.clone())
    }

    async fn create_topic(&self, new_topic: NewTopic) -> Result<Topic, AppError> {
        let mut topics = self.topics.lock().unwrap();
        let topic = Topic {
            id: topics.iter().map(|t| t.id).max().unwrap_or(0) + 1,
            chapter_id: new_topic.chapter_id,
            name: new_topic.name,
            difficulty: new_topic.difficulty,
            is_core_topic: new_topic.is_core_topic,
            deleted_at: None,
        };
        topics.push(topic.clone());
        Ok(topic)
    }

    async fn update_topic(&self, id: i64, patch: TopicPatch) -> Result<Topic, AppError> {
        let mut topics = self.topics.lock().unwrap();
        let topic = topics
            .iter_mut()
            .find(|t| t.id == id && t.deleted_at.is_none())
            .ok_or_else(|| AppError::not_found("Topic not found", json!({ "id": id })))?;
        if let Some(name) = patch.name {
            topic.name = name;
        }
        if let Some(difficulty) = patch.difficulty {
            topic.difficulty = difficulty;
        }
        if let Some(is_core_topic) = patch.is_core_topic {
            topic.is_core_topic = is_core_topic;
        }
        Ok(topic.clone())
    }
}

pub struct FakeQuestionRepository {
    questions: Mutex<Vec<Question>>,
}

#[async_trait]
impl QuestionRepository for FakeQuestionRepository {
    async fn list_for_topic(
        &self,
        topic_id: i64,
        limit: i64,
    ) -> Result<Vec<Question>, AppError> {
        Ok(self
            .questions
            .lock()
            .unwrap()
            .iter()
            .filter(|q| q.topic_id == topic_id && q.deleted_at.is_none())
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn create(&self, new_question: NewQuestion) -> Result<Question, AppError> {
        let mut questions = self.questions.lock().unwrap();
        let question = Question {
            id: questions.iter().map(|q| q.id).max().unwrap_or(0) + 1,
            topic_id: new_question.topic_id,
            question_type: new_question.question_type,
            question_text: new_question.question_text,
            options: new_question.options,
            correct_answer: new_question.correct_answer,
            difficulty: new_question.difficulty,
            created_at: Utc::now(),
            deleted_at: None,
        };
        questions.push(question.clone());
        Ok(question)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Question>, AppError> {
        Ok(self
            .questions
            .lock()
            .unwrap()
            .iter()
            .find(|q| q.id == id && q.deleted_at.is_none())
            .cloned())
    }

    async fn update(&self, id: i64, patch: QuestionPatch) -> Result<Question, AppError> {
        let mut questions = self.questions.lock().unwrap();
        let question = questions
            .iter_mut()
            .find(|q| q.id == id && q.deleted_at.is_none())
            .ok_or_else(|| AppError::not_found("Question not found", json!({ "id": id })))?;
        if let Some(question_type) = patch.question_type {
            question.question_type = question_type;
        }
        if let Some(question_text) = patch.question_text {
            question.question_text = question_text;
        }
        if let Some(options) = patch.options {
            question.options = options;
        }
        if let Some(correct_answer) = patch.correct_answer {
            question.correct_answer = correct_answer;
        }
        if let Some(difficulty) = patch.difficulty {
            question.difficulty = difficulty;
        }
        Ok(question.clone())
    }
}

pub struct FakeQuizRepository {
    quizzes: Mutex<Vec<Quiz>>,
}

#[async_trait]
impl QuizRepository for FakeQuizRepository {
    async fn list(
        &self,
        quiz_type: Option<QuizType>,
        linked_entity_id: Option<i64>,
    ) -> Result<Vec<Quiz>, AppError> {
        Ok(self
            .quizzes
            .lock()
            .unwrap()
            .iter()
            .filter(|q| q.is_active && q.deleted_at.is_none())
            .filter(|q| quiz_type.is_none_or(|t| q.quiz_type == t))
            .filter(|q| linked_entity_id.is_none() || q.linked_entity_id == linked_entity_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Quiz>, AppError> {
        Ok(self
            .quizzes
            .lock()
            .unwrap()
            .iter()
            .find(|q| q.id == id && q.deleted_at.is_none())
            .cloned())
    }

    async fn create(&self, new_quiz: NewQuiz) -> Result<Quiz, AppError> {
        let mut quizzes = self.quizzes.lock().unwrap();
        let quiz = Quiz {
            id: quizzes.iter().map(|q| q.id).max().unwrap_or(0) + 1,
            title: new_quiz.title,
            quiz_type: new_quiz.quiz_type,
            linked_entity_id: new_quiz.linked_entity_id,
            total_questions: new_quiz.total_questions,
            duration_minutes: new_quiz.duration_minutes,
            is_active: new_quiz.is_active,
            created_at: Utc::now(),
            deleted_at: None,
        };
        quizzes.push(quiz.clone());
        Ok(quiz)
    }

    async fn update(&self, id: i64, patch: QuizPatch) -> Result<Quiz, AppError> {
        let mut quizzes = self.quizzes.lock().unwrap();
        let quiz = quizzes
            .iter_mut()
            .find(|q| q.id == id && q.deleted_at.is_none())
            .ok_or_else(|| AppError::not_found("Quiz not found", json!({ "id": id })))?;
        if let Some(title) = patch.title {
            quiz.title = title;
        }
        if let Some(quiz_type) = patch.quiz_type {
            quiz.quiz_type = quiz_type;
        }
        if let Some(linked_entity_id) = patch.linked_entity_id {
            quiz.linked_entity_id = linked_entity_id;
        }
        if let Some(total_questions) = patch.total_questions {
            quiz.total_questions = total_questions;
        }
        if let Some(duration_minutes) = patch.duration_minutes {
            quiz.duration_minutes = duration_minutes;
        }
        if let Some(is_active) = patch.is_active {
            quiz.is_active = is_active;
        }
        Ok(quiz.clone())
    }
}

pub struct FakeAccessRepository {
    records: Mutex<Vec<CourseAccessRecord>>,
}

#[async_trait]
impl AccessRepository for FakeAccessRepository {
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<CourseAccessRecord>, AppError> {
        let mut records: Vec<CourseAccessRecord> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.access.user_id == user_id)
            .cloned()
            .collect();
        records.sort_by_key(|r| std::cmp::Reverse(r.access.purchased_at));
        Ok(records)
    }

    async fn find_current_for_user(
        &self,
        user_id: &str,
    ) -> Result<Option<CourseAccess>, AppError> {
        let now = Utc::now();
        let mut usable: Vec<CourseAccess> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.access.user_id == user_id && r.access.is_usable_at(now))
            .map(|r| r.access.clone())
            .collect();
        usable.sort_by_key(|a| std::cmp::Reverse(a.purchased_at));
        Ok(usable.into_iter().next())
    }
}

pub struct FakeProgressRepository {
    rows: Mutex<Vec<Progress>>,
}

#[async_trait]
impl ProgressRepository for FakeProgressRepository {
    async fn upsert(&self, new_progress: NewProgress) -> Result<Progress, AppError> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(row) = rows.iter_mut().find(|p| {
            p.user_id == new_progress.user_id
                && p.subject_id == new_progress.subject_id
                && p.chapter_id == new_progress.chapter_id
                && p.topic_id == new_progress.topic_id
        }) {
            row.percent = new_progress.percent;
            row.last_accessed = Utc::now();
            return Ok(row.clone());
        }

        let row = Progress {
            id: rows.iter().map(|p| p.id).max().unwrap_or(0) + 1,
            user_id: new_progress.user_id,
            subject_id: new_progress.subject_id,
            chapter_id: new_progress.chapter_id,
            topic_id: new_progress.topic_id,
            percent: new_progress.percent,
            last_accessed: Utc::now(),
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn list_for_user(
        &self,
        user_id: &str,
        subject_id: Option<i64>,
    ) -> Result<Vec<Progress>, AppError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.user_id == user_id)
            .filter(|p| subject_id.is_none_or(|s| p.subject_id == s))
            .cloned()
            .collect())
    }
}

pub struct FakeCouponRepository {
    coupons: Mutex<Vec<Coupon>>,
}

#[async_trait]
impl CouponRepository for FakeCouponRepository {
    async fn list(&self) -> Result<Vec<Coupon>, AppError> {
        Ok(self
            .coupons
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.deleted_at.is_none())
            .cloned()
            .collect())
    }

    async fn create(&self, new_coupon: NewCoupon) -> Result<Coupon, AppError> {
        let mut coupons = self.coupons.lock().unwrap();
        if coupons
            .iter()
            .any(|c| c.code == new_coupon.code && c.deleted_at.is_none())
        {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "code": new_coupon.code }),
            ));
        }
        let coupon = Coupon {
            id: coupons.iter().map(|c| c.id).max().unwrap_or(0) + 1,
            code: new_coupon.code,
            discount_percent: new_coupon.discount_percent,
            is_active: new_coupon.is_active,
            valid_until: new_coupon.valid_until,
            created_at: Utc::now(),
            deleted_at: None,
        };
        coupons.push(coupon.clone());
        Ok(coupon)
    }

    async fn update(&self, id: i64, patch: CouponPatch) -> Result<Coupon, AppError> {
        let mut coupons = self.coupons.lock().unwrap();
        let coupon = coupons
            .iter_mut()
            .find(|c| c.id == id && c.deleted_at.is_none())
            .ok_or_else(|| AppError::not_found("Coupon not found", json!({ "id": id })))?;
        if let Some(discount_percent) = patch.discount_percent {
            coupon.discount_percent = discount_percent;
        }
        if let Some(is_active) = patch.is_active {
            coupon.is_active = is_active;
        }
        if let Some(valid_until) = patch.valid_until {
            coupon.valid_until = valid_until;
        }
        Ok(coupon.clone())
    }
}

pub struct FakeContactRepository {
    messages: Mutex<Vec<ContactMessage>>,
}

#[async_trait]
impl ContactRepository for FakeContactRepository {
    async fn create(&self, new_message: NewContactMessage) -> Result<ContactMessage, AppError> {
        let mut messages = self.messages.lock().unwrap();
        let message = ContactMessage {
            id: messages.iter().map(|m| m.id).max().unwrap_or(0) + 1,
            name: new_message.name,
            phone: new_message.phone,
            email: new_message.email,
            message: new_message.message,
            created_at: Utc::now(),
        };
        messages.push(message.clone());
        Ok(message)
    }
}

pub struct FakePaperRepository {
    papers: Mutex<Vec<Paper>>,
    downloads: Mutex<Vec<(i64, String)>>,
}

#[async_trait]
impl PaperRepository for FakePaperRepository {
    async fn list(
        &self,
        kind: PaperKind,
        exam_id: i64,
        year: Option<i32>,
    ) -> Result<Vec<Paper>, AppError> {
        let mut papers: Vec<Paper> = self
            .papers
            .lock()
            .unwrap()
            .iter()
            .filter(|p| {
                p.kind == kind
                    && p.exam_id == exam_id
                    && p.is_active
                    && p.deleted_at.is_none()
                    && year.is_none_or(|y| p.year == y)
            })
            .cloned()
            .collect();
        papers.sort_by_key(|p| std::cmp::Reverse(p.year));
        Ok(papers)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Paper>, AppError> {
        Ok(self
            .papers
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id && p.deleted_at.is_none())
            .cloned())
    }

    async fn record_download(&self, paper_id: i64, user_id: &str) -> Result<(), AppError> {
        self.downloads
            .lock()
            .unwrap()
            .push((paper_id, user_id.to_string()));
        Ok(())
    }
}

/// Builds the full application state over in-memory repositories seeded with
/// `fixtures`.
///
/// The pool is lazy and never connects; only the health route touches it.
pub fn make_state(fixtures: Fixtures) -> AppState {
    let pool = PgPool::connect_lazy("postgres://localhost/unused").unwrap();

    let exam_repository = Arc::new(FakeExamRepository {
        exams: Mutex::new(fixtures.exams),
    });
    let course_repository = Arc::new(FakeCourseRepository {
        courses: Mutex::new(fixtures.courses),
    });
    let syllabus_repository = Arc::new(FakeSyllabusRepository {
        syllabi: Mutex::new(fixtures.syllabi),
        subjects: Mutex::new(fixtures.subjects),
        chapters: Mutex::new(fixtures.chapters),
        topics: Mutex::new(fixtures.topics),
    });
    let question_repository = Arc::new(FakeQuestionRepository {
        questions: Mutex::new(fixtures.questions),
    });
    let quiz_repository = Arc::new(FakeQuizRepository {
        quizzes: Mutex::new(fixtures.quizzes),
    });
    let access_repository = Arc::new(FakeAccessRepository {
        records: Mutex::new(fixtures.access),
    });
    let progress_repository = Arc::new(FakeProgressRepository {
        rows: Mutex::new(Vec::new()),
    });
    let coupon_repository = Arc::new(FakeCouponRepository {
        coupons: Mutex::new(fixtures.coupons),
    });
    let contact_repository = Arc::new(FakeContactRepository {
        messages: Mutex::new(Vec::new()),
    });
    let paper_repository = Arc::new(FakePaperRepository {
        papers: Mutex::new(fixtures.papers),
        downloads: Mutex::new(Vec::new()),
    });

    AppState {
        db: Arc::new(pool),
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
            MailConfig::default(),
        )),
        paper_service: Arc::new(PaperService::new(paper_repository)),
    }
}

/// Test server over the full router, middleware included.
pub fn make_server(fixtures: Fixtures) -> axum_test::TestServer {
    axum_test::TestServer::new(app_router(make_state(fixtures))).unwrap()
}

// ── Entity builders ─────────────────────────────────────────────────────────

pub fn exam(id: i64, name: &str, exam_type: ExamType) -> Exam {
    Exam {
        id,
        name: name.to_string(),
        exam_type,
        conducted_by: None,
        is_active: true,
        created_at: Utc::now(),
        deleted_at: None,
    }
}

pub fn course(id: i64, exam_id: i64, slug: &str) -> Course {
    Course {
        id,
        exam_id,
        name: format!("Course {id}"),
        slug: slug.to_string(),
        course_type: CourseType::Full,
        base_price: 10_000,
        sale_price: Some(7_500),
        currency: "INR".to_string(),
        is_free: false,
        is_active: true,
        created_at: Utc::now(),
        deleted_at: None,
    }
}

pub fn syllabus(id: i64, exam_id: i64, course_id: i64, year: i32) -> Syllabus {
    Syllabus {
        id,
        exam_id,
        course_id,
        academic_year: year,
        is_active: true,
        created_at: Utc::now(),
        deleted_at: None,
    }
}

pub fn subject(id: i64, syllabus_id: i64, en: &str, hi: Option<&str>, order: i32) -> Subject {
    Subject {
        id,
        syllabus_id,
        name: match hi {
            Some(hi) => LocalizedText::with_hi(en, hi),
            None => LocalizedText::new(en),
        },
        order,
        is_active: true,
        deleted_at: None,
    }
}

pub fn chapter(id: i64, subject_id: i64, number: i32, en: &str) -> Chapter {
    Chapter {
        id,
        subject_id,
        chapter_number: number,
        name: LocalizedText::new(en),
        order: number,
        deleted_at: None,
    }
}

pub fn topic(id: i64, chapter_id: i64, en: &str) -> Topic {
    Topic {
        id,
        chapter_id,
        name: LocalizedText::new(en),
        difficulty: Difficulty::Medium,
        is_core_topic: false,
        deleted_at: None,
    }
}

pub fn lifetime_access(user_id: &str, course: &Course) -> CourseAccessRecord {
    CourseAccessRecord {
        access: CourseAccess {
            id: course.id,
            user_id: user_id.to_string(),
            course_id: course.id,
            lifetime: true,
            is_free: course.is_free,
            expires_at: None,
            price_base: course.base_price,
            price_sale: course.sale_price,
            price_final: course.final_price(),
            currency: course.currency.clone(),
            purchased_at: Utc::now(),
        },
        course_name: course.name.clone(),
        course_slug: course.slug.clone(),
    }
}

pub fn paper(id: i64, exam_id: i64, kind: PaperKind, year: i32, is_active: bool) -> Paper {
    Paper {
        id,
        exam_id,
        kind,
        title: format!("Paper {year}"),
        year,
        file_url: format!("https://cdn.example.com/papers/{id}.pdf"),
        is_active,
        created_at: Utc::now(),
        deleted_at: None,
    }
}
