use super::QuestionService;
use crate::errors::{QAForumError, Result};
use crate::models::questions::responses::QuestionDetail;
use crate::services::poster_display_name;
use crate::utils::validate::validate_entity_id;

pub async fn get_question(service: &QuestionService, question_id: i64) -> Result<QuestionDetail> {
    validate_entity_id(question_id, "question").map_err(QAForumError::validation)?;

    let storage = service.storage();

    let question = storage
        .get_question_by_id(question_id)
        .await?
        .ok_or_else(|| QAForumError::not_found(format!("Question {question_id} not found")))?;

    // poster_name 读取时派生，从不落库
    let poster = storage.get_student_by_id(question.poster_id).await?;
    let poster_name = poster_display_name(question.is_anonymous, poster.as_ref());

    Ok(QuestionDetail {
        question,
        poster_name,
    })
}
