use super::StudentService;
use crate::errors::{QAForumError, Result};
use crate::models::students::{entities::Student, requests::UpdateStudentRequest};
use crate::utils::validate::{
    MAJOR_MAX_LEN, NAME_MAX_LEN, validate_age, validate_entity_id, validate_required_text,
};

pub async fn update_student(
    service: &StudentService,
    student_id: i64,
    update_data: UpdateStudentRequest,
) -> Result<Student> {
    validate_entity_id(student_id, "student").map_err(QAForumError::validation)?;

    // 空更新直接拒绝
    if update_data.is_empty() {
        return Err(QAForumError::validation(
            "Update must include at least one field",
        ));
    }

    // 逐字段复验
    if let Some(ref first_name) = update_data.first_name {
        validate_required_text(first_name, "first_name", NAME_MAX_LEN)
            .map_err(QAForumError::validation)?;
    }
    if let Some(ref last_name) = update_data.last_name {
        validate_required_text(last_name, "last_name", NAME_MAX_LEN)
            .map_err(QAForumError::validation)?;
    }
    if let Some(ref major) = update_data.major {
        validate_required_text(major, "major", MAJOR_MAX_LEN).map_err(QAForumError::validation)?;
    }
    if let Some(age) = update_data.age {
        validate_age(age).map_err(QAForumError::validation)?;
    }

    let storage = service.storage();

    // 选课列表整体替换前确认每门课程都存在
    if let Some(ref course_ids) = update_data.enrolled_course_ids {
        for &course_id in course_ids {
            validate_entity_id(course_id, "course").map_err(QAForumError::validation)?;
            if storage.get_course_by_id(course_id).await?.is_none() {
                return Err(QAForumError::not_found(format!(
                    "Course {course_id} not found"
                )));
            }
        }
    }

    storage
        .update_student(student_id, update_data)
        .await?
        .ok_or_else(|| QAForumError::not_found(format!("Student {student_id} not found")))
}
