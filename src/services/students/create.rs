use tracing::info;

use super::StudentService;
use crate::errors::{QAForumError, Result};
use crate::models::students::{entities::Student, requests::CreateStudentRequest};
use crate::utils::validate::{
    MAJOR_MAX_LEN, NAME_MAX_LEN, validate_age, validate_email, validate_required_text,
};

pub async fn create_student(
    service: &StudentService,
    student_data: CreateStudentRequest,
) -> Result<Student> {
    let storage = service.storage();

    // 字段校验
    validate_required_text(&student_data.first_name, "first_name", NAME_MAX_LEN)
        .map_err(QAForumError::validation)?;
    validate_required_text(&student_data.last_name, "last_name", NAME_MAX_LEN)
        .map_err(QAForumError::validation)?;
    validate_required_text(&student_data.major, "major", MAJOR_MAX_LEN)
        .map_err(QAForumError::validation)?;
    validate_age(student_data.age).map_err(QAForumError::validation)?;
    validate_email(&student_data.email).map_err(QAForumError::validation)?;

    // 邮箱全局唯一，先查重再写入；并发写入的兜底由唯一索引保证
    if storage
        .get_student_by_email(&student_data.email)
        .await?
        .is_some()
    {
        return Err(QAForumError::conflict(format!(
            "Email {} is already registered",
            student_data.email.to_lowercase()
        )));
    }

    let student = storage.create_student(student_data).await?;
    info!("Student {} registered ({})", student.id, student.email);

    Ok(student)
}
