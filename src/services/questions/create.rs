use tracing::info;

use super::QuestionService;
use crate::errors::{QAForumError, Result};
use crate::models::questions::{entities::Question, requests::CreateQuestionRequest};
use crate::utils::validate::{
    validate_entity_id, validate_question_content, validate_question_title,
};

pub async fn create_question(
    service: &QuestionService,
    question_data: CreateQuestionRequest,
) -> Result<Question> {
    validate_entity_id(question_data.course_id, "course").map_err(QAForumError::validation)?;
    validate_entity_id(question_data.poster_id, "student").map_err(QAForumError::validation)?;
    validate_question_title(&question_data.title).map_err(QAForumError::validation)?;
    validate_question_content(&question_data.content).map_err(QAForumError::validation)?;

    let storage = service.storage();

    if storage
        .get_course_by_id(question_data.course_id)
        .await?
        .is_none()
    {
        return Err(QAForumError::not_found(format!(
            "Course {} not found",
            question_data.course_id
        )));
    }

    // 发帖人必须真实存在。是否选修该课程这里不做校验：
    // 上游会话层已完成身份认证，选课约束沿用其现状。
    if storage
        .get_student_by_id(question_data.poster_id)
        .await?
        .is_none()
    {
        return Err(QAForumError::not_found(format!(
            "Student {} not found",
            question_data.poster_id
        )));
    }

    let question = storage.create_question(question_data).await?;
    info!(
        "Question {} created in course {} by student {}",
        question.id, question.course_id, question.poster_id
    );

    Ok(question)
}

#[cfg(test)]
mod tests {
    use crate::models::questions::requests::CreateQuestionRequest;
    use crate::services::QuestionService;
    use crate::services::test_support::{seed_course, seed_student, test_storage};

    #[tokio::test]
    async fn test_new_question_starts_open() {
        let storage = test_storage().await;
        let student = seed_student(&storage, "Jane", "Doe", "jane.doe@university.edu").await;
        let course = seed_course(&storage, "CS-3420").await;
        let service = QuestionService::new(storage);

        let question = service
            .create_question(CreateQuestionRequest {
                course_id: course.id,
                poster_id: student.id,
                title: "What does the borrow checker want from me?".to_string(),
                content: "The same code compiles when I inline the closure.".to_string(),
                is_anonymous: false,
            })
            .await
            .unwrap();

        assert!(!question.is_resolved);
        assert_eq!(question.poster_id, student.id);
    }

    #[tokio::test]
    async fn test_title_and_content_caps_enforced() {
        let storage = test_storage().await;
        let student = seed_student(&storage, "Jane", "Doe", "jane.doe@university.edu").await;
        let course = seed_course(&storage, "CS-3420").await;
        let service = QuestionService::new(storage);

        let err = service
            .create_question(CreateQuestionRequest {
                course_id: course.id,
                poster_id: student.id,
                title: "t".repeat(201),
                content: "content".to_string(),
                is_anonymous: false,
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E001");

        let err = service
            .create_question(CreateQuestionRequest {
                course_id: course.id,
                poster_id: student.id,
                title: "Valid title".to_string(),
                content: "c".repeat(2001),
                is_anonymous: false,
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E001");
    }

    #[tokio::test]
    async fn test_missing_course_rejected() {
        let storage = test_storage().await;
        let student = seed_student(&storage, "Jane", "Doe", "jane.doe@university.edu").await;
        let service = QuestionService::new(storage);

        let err = service
            .create_question(CreateQuestionRequest {
                course_id: 404,
                poster_id: student.id,
                title: "Orphan question".to_string(),
                content: "This course does not exist.".to_string(),
                is_anonymous: false,
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E002");
    }

    #[tokio::test]
    async fn test_malformed_ids_fail_fast() {
        let storage = test_storage().await;
        let service = QuestionService::new(storage);

        let err = service
            .create_question(CreateQuestionRequest {
                course_id: 0,
                poster_id: 1,
                title: "Bad ids".to_string(),
                content: "Should not reach storage.".to_string(),
                is_anonymous: false,
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E001");
    }
}
