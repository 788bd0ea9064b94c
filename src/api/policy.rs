//! Central authorization table: which roles may reach which route group.
//!
//! Every guarded router is wrapped with exactly one [`RouteGroup`], so the
//! whole access policy is readable from this single table.

use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Caller role resolved upstream and forwarded via the `x-user-role` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Admin,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "teacher" => Ok(Role::Teacher),
            "admin" => Ok(Role::Admin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Coarse route grouping for authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteGroup {
    /// Catalog reads, open to everyone.
    Public,
    /// Per-user routes: dashboard, library, progress, downloads.
    User,
    /// Content management: syllabus tree, questions, quizzes.
    Content,
    /// Platform administration: exams, courses, coupons.
    Admin,
}

impl RouteGroup {
    /// Roles allowed into this group.
    pub fn allowed_roles(self) -> &'static [Role] {
        match self {
            RouteGroup::Public | RouteGroup::User => {
                &[Role::Student, Role::Teacher, Role::Admin]
            }
            RouteGroup::Content => &[Role::Admin, Role::Teacher],
            RouteGroup::Admin => &[Role::Admin],
        }
    }

    pub fn is_allowed(self, role: Role) -> bool {
        self.allowed_roles().contains(&role)
    }
}
