use tracing::info;

use super::ResponseService;
use crate::errors::{QAForumError, Result};
use crate::services::policy;
use crate::utils::validate::validate_entity_id;

pub async fn delete_response(
    service: &ResponseService,
    response_id: i64,
    acting_student_id: i64,
) -> Result<()> {
    validate_entity_id(response_id, "response").map_err(QAForumError::validation)?;
    validate_entity_id(acting_student_id, "student").map_err(QAForumError::validation)?;

    let storage = service.storage();

    // 所有权校验
    let response = storage
        .get_response_by_id(response_id)
        .await?
        .ok_or_else(|| QAForumError::not_found(format!("Response {response_id} not found")))?;
    policy::require_owner(acting_student_id, response.poster_id, "response")?;

    let deleted = storage.delete_response(response_id).await?;
    if !deleted {
        return Err(QAForumError::not_found(format!(
            "Response {response_id} not found"
        )));
    }

    info!("Response {} deleted by student {}", response_id, acting_student_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::models::questions::requests::CreateQuestionRequest;
    use crate::models::responses::requests::CreateResponseRequest;
    use crate::services::test_support::{seed_course, seed_student, test_storage};
    use crate::services::{QuestionService, ResponseService};

    #[tokio::test]
    async fn test_only_response_poster_may_delete() {
        let storage = test_storage().await;
        let asker = seed_student(&storage, "Jane", "Doe", "jane.doe@university.edu").await;
        let helper = seed_student(&storage, "Raj", "Patel", "raj.patel@university.edu").await;
        let course = seed_course(&storage, "CS-3420").await;
        let questions = QuestionService::new(storage.clone());
        let responses = ResponseService::new(storage);

        let question = questions
            .create_question(CreateQuestionRequest {
                course_id: course.id,
                poster_id: asker.id,
                title: "Deletable response below".to_string(),
                content: "Someone will answer and regret it.".to_string(),
                is_anonymous: false,
            })
            .await
            .unwrap();

        let response = responses
            .create_response(CreateResponseRequest {
                question_id: question.id,
                poster_id: helper.id,
                content: "Temporary answer.".to_string(),
                is_anonymous: false,
            })
            .await
            .unwrap();

        // 提问人不能删除别人的回答
        let err = responses
            .delete_response(response.id, asker.id)
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E004");

        // 回答人自己可以
        responses
            .delete_response(response.id, helper.id)
            .await
            .unwrap();
        assert!(responses.get_response(response.id).await.is_err());
    }
}
