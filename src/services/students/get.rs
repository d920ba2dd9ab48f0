use super::StudentService;
use crate::errors::{QAForumError, Result};
use crate::models::students::entities::Student;
use crate::utils::validate::{validate_email, validate_entity_id};

pub async fn get_student(service: &StudentService, student_id: i64) -> Result<Student> {
    validate_entity_id(student_id, "student").map_err(QAForumError::validation)?;

    service
        .storage()
        .get_student_by_id(student_id)
        .await?
        .ok_or_else(|| QAForumError::not_found(format!("Student {student_id} not found")))
}

pub async fn find_by_email(service: &StudentService, email: &str) -> Result<Student> {
    // 非法邮箱直接拒绝，不查询存储层
    validate_email(email).map_err(QAForumError::validation)?;

    service
        .storage()
        .get_student_by_email(email)
        .await?
        .ok_or_else(|| QAForumError::not_found(format!("No student registered under {email}")))
}
