use tracing::info;

use super::QuestionService;
use crate::errors::{QAForumError, Result};
use crate::models::questions::responses::CascadeDeleteResult;
use crate::services::policy;
use crate::utils::validate::validate_entity_id;

pub async fn delete_question(
    service: &QuestionService,
    question_id: i64,
    acting_student_id: i64,
) -> Result<CascadeDeleteResult> {
    validate_entity_id(question_id, "question").map_err(QAForumError::validation)?;
    validate_entity_id(acting_student_id, "student").map_err(QAForumError::validation)?;

    let storage = service.storage();

    // 所有权校验
    let question = storage
        .get_question_by_id(question_id)
        .await?
        .ok_or_else(|| QAForumError::not_found(format!("Question {question_id} not found")))?;
    policy::require_owner(acting_student_id, question.poster_id, "question")?;

    // 回答 → 通知 → 问题，存储层在一个事务内完成
    let cascade = storage
        .delete_question_cascade(question_id)
        .await?
        .ok_or_else(|| QAForumError::not_found(format!("Question {question_id} not found")))?;

    info!(
        "Question {} deleted with {} response(s) and {} notification(s)",
        question_id, cascade.responses_deleted, cascade.notifications_deleted
    );

    Ok(cascade)
}
