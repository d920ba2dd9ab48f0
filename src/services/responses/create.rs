use tracing::{error, info};

use super::ResponseService;
use crate::errors::{QAForumError, Result};
use crate::models::notifications::{
    entities::NotificationType, requests::CreateNotificationRequest,
};
use crate::models::responses::{entities::Response, requests::CreateResponseRequest};
use crate::services::{notifications, poster_display_name};
use crate::utils::validate::{validate_entity_id, validate_response_content};

pub async fn create_response(
    service: &ResponseService,
    response_data: CreateResponseRequest,
) -> Result<Response> {
    validate_entity_id(response_data.question_id, "question").map_err(QAForumError::validation)?;
    validate_entity_id(response_data.poster_id, "student").map_err(QAForumError::validation)?;
    validate_response_content(&response_data.content).map_err(QAForumError::validation)?;

    let storage = service.storage();

    let question = storage
        .get_question_by_id(response_data.question_id)
        .await?
        .ok_or_else(|| {
            QAForumError::not_found(format!(
                "Question {} not found",
                response_data.question_id
            ))
        })?;

    // 回答人必须真实存在；是否选修该课程沿用提问侧的约定，不做校验
    let poster = storage
        .get_student_by_id(response_data.poster_id)
        .await?
        .ok_or_else(|| {
            QAForumError::not_found(format!("Student {} not found", response_data.poster_id))
        })?;

    let response = storage.create_response(response_data).await?;
    info!(
        "Response {} posted on question {} by student {}",
        response.id, response.question_id, response.poster_id
    );

    // 给提问人的通知：尽力而为，失败只记日志，不影响回答本身
    if question.poster_id != response.poster_id {
        let sender_name = poster_display_name(response.is_anonymous, Some(&poster));
        let notification = CreateNotificationRequest {
            recipient_id: question.poster_id,
            question_id: question.id,
            sender_id: response.poster_id,
            notification_type: NotificationType::NewResponse,
            message: format!(
                "{} responded to your question \"{}\"",
                sender_name, question.title
            ),
        };

        if let Err(e) = notifications::create::create_notification(&storage, notification).await {
            error!(
                "Failed to deliver new-response notification for question {}: {}",
                question.id, e
            );
        }
    }

    Ok(response)
}

#[cfg(test)]
mod tests {
    use crate::models::questions::requests::CreateQuestionRequest;
    use crate::models::responses::requests::CreateResponseRequest;
    use crate::services::test_support::{seed_course, seed_student, test_storage};
    use crate::services::{NotificationService, QuestionService, ResponseService};

    #[tokio::test]
    async fn test_response_to_peer_question_notifies_poster() {
        let storage = test_storage().await;
        let asker = seed_student(&storage, "Jane", "Doe", "jane.doe@university.edu").await;
        let helper = seed_student(&storage, "Raj", "Patel", "raj.patel@university.edu").await;
        let course = seed_course(&storage, "CS-3420").await;
        let questions = QuestionService::new(storage.clone());
        let responses = ResponseService::new(storage.clone());
        let notifications = NotificationService::new(storage);

        let question = questions
            .create_question(CreateQuestionRequest {
                course_id: course.id,
                poster_id: asker.id,
                title: "Why is my iterator empty?".to_string(),
                content: "It worked before I added the filter.".to_string(),
                is_anonymous: false,
            })
            .await
            .unwrap();

        responses
            .create_response(CreateResponseRequest {
                question_id: question.id,
                poster_id: helper.id,
                content: "filter() consumed everything, check the predicate.".to_string(),
                is_anonymous: false,
            })
            .await
            .unwrap();

        let inbox = notifications.list_for_recipient(asker.id, true).await.unwrap();
        assert_eq!(inbox.len(), 1);
        assert_eq!(inbox[0].sender_id, helper.id);
        assert!(inbox[0].message.contains("Raj Patel"));
        assert!(inbox[0].message.contains("Why is my iterator empty?"));
    }

    #[tokio::test]
    async fn test_self_response_produces_no_notification() {
        let storage = test_storage().await;
        let asker = seed_student(&storage, "Jane", "Doe", "jane.doe@university.edu").await;
        let course = seed_course(&storage, "CS-3420").await;
        let questions = QuestionService::new(storage.clone());
        let responses = ResponseService::new(storage.clone());
        let notifications = NotificationService::new(storage);

        let question = questions
            .create_question(CreateQuestionRequest {
                course_id: course.id,
                poster_id: asker.id,
                title: "Never mind, figured it out".to_string(),
                content: "Posting the fix for posterity.".to_string(),
                is_anonymous: false,
            })
            .await
            .unwrap();

        // 自己回答自己的问题，不产生通知
        responses
            .create_response(CreateResponseRequest {
                question_id: question.id,
                poster_id: asker.id,
                content: "The answer was a missing semicolon.".to_string(),
                is_anonymous: false,
            })
            .await
            .unwrap();

        let inbox = notifications
            .list_for_recipient(asker.id, false)
            .await
            .unwrap();
        assert!(inbox.is_empty());
    }

    #[tokio::test]
    async fn test_anonymous_response_masks_sender_in_message() {
        let storage = test_storage().await;
        let asker = seed_student(&storage, "Jane", "Doe", "jane.doe@university.edu").await;
        let helper = seed_student(&storage, "Raj", "Patel", "raj.patel@university.edu").await;
        let course = seed_course(&storage, "CS-3420").await;
        let questions = QuestionService::new(storage.clone());
        let responses = ResponseService::new(storage.clone());
        let notifications = NotificationService::new(storage);

        let question = questions
            .create_question(CreateQuestionRequest {
                course_id: course.id,
                poster_id: asker.id,
                title: "Embarrassingly basic question".to_string(),
                content: "What is a pointer?".to_string(),
                is_anonymous: false,
            })
            .await
            .unwrap();

        responses
            .create_response(CreateResponseRequest {
                question_id: question.id,
                poster_id: helper.id,
                content: "An address with opinions.".to_string(),
                is_anonymous: true,
            })
            .await
            .unwrap();

        let inbox = notifications.list_for_recipient(asker.id, true).await.unwrap();
        assert_eq!(inbox.len(), 1);
        assert!(inbox[0].message.starts_with("Anonymous"));
        assert!(!inbox[0].message.contains("Raj"));
    }

    #[tokio::test]
    async fn test_response_to_missing_question_rejected() {
        let storage = test_storage().await;
        let helper = seed_student(&storage, "Raj", "Patel", "raj.patel@university.edu").await;
        let responses = ResponseService::new(storage);

        let err = responses
            .create_response(CreateResponseRequest {
                question_id: 9999,
                poster_id: helper.id,
                content: "Answering the void.".to_string(),
                is_anonymous: false,
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E002");
    }
}
