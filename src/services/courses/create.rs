use tracing::info;

use super::CourseService;
use crate::errors::{QAForumError, Result};
use crate::models::courses::{entities::Course, requests::CreateCourseRequest};
use crate::utils::validate::{TITLE_MAX_LEN, validate_email, validate_required_text};

// 课程录入。属于数据维护入口，不做选课或身份相关的校验。
pub async fn create_course(
    service: &CourseService,
    course_data: CreateCourseRequest,
) -> Result<Course> {
    validate_required_text(&course_data.code, "code", 20).map_err(QAForumError::validation)?;
    validate_required_text(&course_data.name, "name", TITLE_MAX_LEN)
        .map_err(QAForumError::validation)?;
    validate_email(&course_data.instructor_email).map_err(QAForumError::validation)?;

    let course = service.storage().create_course(course_data).await?;
    info!("Course {} ({}) created", course.id, course.code);

    Ok(course)
}
