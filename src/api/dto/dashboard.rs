//! Composite DTO for the student dashboard.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::api::dto::course::CourseDto;
use crate::api::dto::syllabus::{SidebarSubject, SyllabusDto, build_sidebar};
use crate::application::services::DashboardData;
use crate::domain::entities::AccessStatus;
use crate::domain::lang::Lang;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardDto {
    pub course: CourseDto,
    pub access_status: AccessStatus,
    pub syllabus: SyllabusDto,
    pub sidebar: Vec<SidebarSubject>,
}

impl DashboardDto {
    pub fn from_data(data: DashboardData, lang: Lang, now: DateTime<Utc>) -> Self {
        Self {
            course: data.course.into(),
            access_status: data.access.status_at(now),
            syllabus: data.content.syllabus.into(),
            sidebar: build_sidebar(
                data.content.subjects,
                data.content.chapters,
                data.content.topics,
                lang,
            ),
        }
    }
}
