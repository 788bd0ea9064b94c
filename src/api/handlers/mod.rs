//! HTTP request handlers.

pub mod contact;
pub mod coupon;
pub mod course;
pub mod dashboard;
pub mod exam;
pub mod health;
pub mod library;
pub mod paper;
pub mod progress;
pub mod question;
pub mod quiz;
pub mod syllabus;
