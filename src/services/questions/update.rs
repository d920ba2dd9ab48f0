use super::QuestionService;
use crate::errors::{QAForumError, Result};
use crate::models::questions::{entities::Question, requests::UpdateQuestionRequest};
use crate::services::policy;
use crate::utils::validate::{
    validate_entity_id, validate_question_content, validate_question_title,
};

pub async fn update_question(
    service: &QuestionService,
    question_id: i64,
    update_data: UpdateQuestionRequest,
    acting_student_id: i64,
) -> Result<Question> {
    validate_entity_id(question_id, "question").map_err(QAForumError::validation)?;
    validate_entity_id(acting_student_id, "student").map_err(QAForumError::validation)?;

    // 空更新直接拒绝
    if update_data.is_empty() {
        return Err(QAForumError::validation(
            "Update must include at least one field",
        ));
    }

    // 逐字段复验长度上限
    if let Some(ref title) = update_data.title {
        validate_question_title(title).map_err(QAForumError::validation)?;
    }
    if let Some(ref content) = update_data.content {
        validate_question_content(content).map_err(QAForumError::validation)?;
    }

    let storage = service.storage();

    // 所有权校验：重新取出实体，与请求者比对后才允许写入
    let question = storage
        .get_question_by_id(question_id)
        .await?
        .ok_or_else(|| QAForumError::not_found(format!("Question {question_id} not found")))?;
    policy::require_owner(acting_student_id, question.poster_id, "question")?;

    storage
        .update_question(question_id, update_data)
        .await?
        .ok_or_else(|| QAForumError::not_found(format!("Question {question_id} not found")))
}
