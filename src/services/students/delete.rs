use tracing::info;

use super::StudentService;
use crate::errors::{QAForumError, Result};
use crate::utils::validate::validate_entity_id;

// 删除学生账号。常规流程不会触达这里，也不触发任何级联清理。
pub async fn delete_student(service: &StudentService, student_id: i64) -> Result<()> {
    validate_entity_id(student_id, "student").map_err(QAForumError::validation)?;

    let deleted = service.storage().delete_student(student_id).await?;
    if !deleted {
        return Err(QAForumError::not_found(format!(
            "Student {student_id} not found"
        )));
    }

    info!("Student {} deleted", student_id);
    Ok(())
}
