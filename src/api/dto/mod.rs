//! Request/response bodies and query parameters for the HTTP surface.

pub mod access;
pub mod contact;
pub mod coupon;
pub mod course;
pub mod dashboard;
pub mod exam;
pub mod paper;
pub mod params;
pub mod progress;
pub mod question;
pub mod quiz;
pub mod syllabus;
