use tracing::error;

use super::ResponseService;
use crate::errors::{QAForumError, Result};
use crate::models::notifications::{
    entities::NotificationType, requests::CreateNotificationRequest,
};
use crate::models::responses::{entities::Response, requests::UpdateResponseRequest};
use crate::services::{notifications, policy, poster_display_name};
use crate::utils::validate::{validate_entity_id, validate_response_content};

pub async fn update_response(
    service: &ResponseService,
    response_id: i64,
    update_data: UpdateResponseRequest,
    acting_student_id: i64,
) -> Result<Response> {
    validate_entity_id(response_id, "response").map_err(QAForumError::validation)?;
    validate_entity_id(acting_student_id, "student").map_err(QAForumError::validation)?;

    // 空更新直接拒绝
    if update_data.is_empty() {
        return Err(QAForumError::validation(
            "Update must include at least one field",
        ));
    }

    if let Some(ref content) = update_data.content {
        validate_response_content(content).map_err(QAForumError::validation)?;
    }

    let storage = service.storage();

    let response = storage
        .get_response_by_id(response_id)
        .await?
        .ok_or_else(|| QAForumError::not_found(format!("Response {response_id} not found")))?;

    // 正文的修改权在回答发帖人
    if update_data.content.is_some() {
        policy::require_owner(acting_student_id, response.poster_id, "response")?;
    }

    // 有帮助标记的切换权在所属问题的发帖人
    let question = if update_data.is_helpful.is_some() {
        let question = storage
            .get_question_by_id(response.question_id)
            .await?
            .ok_or_else(|| {
                QAForumError::not_found(format!("Question {} not found", response.question_id))
            })?;
        policy::require_owner(acting_student_id, question.poster_id, "question")?;
        Some(question)
    } else {
        None
    };

    // 只有 未标记 → 有帮助 的跳变通知回答人；取消标记从不通知
    let entered_helpful = update_data.is_helpful == Some(true) && !response.is_helpful;

    let updated = storage
        .update_response(response_id, update_data)
        .await?
        .ok_or_else(|| QAForumError::not_found(format!("Response {response_id} not found")))?;

    if entered_helpful && response.poster_id != acting_student_id {
        // question 在 is_helpful 分支中一定已取出
        if let Some(question) = question {
            let marker = storage.get_student_by_id(acting_student_id).await?;
            let marker_name = poster_display_name(question.is_anonymous, marker.as_ref());
            let notification = CreateNotificationRequest {
                recipient_id: response.poster_id,
                question_id: question.id,
                sender_id: acting_student_id,
                notification_type: NotificationType::HelpfulMark,
                message: format!(
                    "{} marked your response as helpful on \"{}\"",
                    marker_name, question.title
                ),
            };

            if let Err(e) =
                notifications::create::create_notification(&storage, notification).await
            {
                error!(
                    "Failed to deliver helpful-mark notification for response {}: {}",
                    response_id, e
                );
            }
        }
    }

    Ok(updated)
}

#[cfg(test)]
mod tests {
    use crate::models::notifications::entities::NotificationType;
    use crate::models::questions::requests::CreateQuestionRequest;
    use crate::models::responses::requests::{CreateResponseRequest, UpdateResponseRequest};
    use crate::services::test_support::{seed_course, seed_student, test_storage};
    use crate::services::{NotificationService, QuestionService, ResponseService};

    struct Scenario {
        asker_id: i64,
        helper_id: i64,
        response_id: i64,
    }

    async fn post_question_with_response(
        storage: &std::sync::Arc<dyn crate::storage::Storage>,
    ) -> Scenario {
        let asker = seed_student(storage, "Jane", "Doe", "jane.doe@university.edu").await;
        let helper = seed_student(storage, "Raj", "Patel", "raj.patel@university.edu").await;
        let course = seed_course(storage, "CS-3420").await;
        let questions = QuestionService::new(storage.clone());
        let responses = ResponseService::new(storage.clone());

        let question = questions
            .create_question(CreateQuestionRequest {
                course_id: course.id,
                poster_id: asker.id,
                title: "Lifetime puzzle".to_string(),
                content: "Why does this reference not live long enough?".to_string(),
                is_anonymous: false,
            })
            .await
            .unwrap();

        let response = responses
            .create_response(CreateResponseRequest {
                question_id: question.id,
                poster_id: helper.id,
                content: "The borrow ends at the closing brace.".to_string(),
                is_anonymous: false,
            })
            .await
            .unwrap();

        Scenario {
            asker_id: asker.id,
            helper_id: helper.id,
            response_id: response.id,
        }
    }

    #[tokio::test]
    async fn test_helpful_mark_requires_question_poster() {
        let storage = test_storage().await;
        let scenario = post_question_with_response(&storage).await;
        let responses = ResponseService::new(storage);

        // 回答人自己不能标记有帮助
        let err = responses
            .update_response(
                scenario.response_id,
                UpdateResponseRequest {
                    is_helpful: Some(true),
                    ..Default::default()
                },
                scenario.helper_id,
            )
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E004");

        // 提问人可以
        let updated = responses
            .update_response(
                scenario.response_id,
                UpdateResponseRequest {
                    is_helpful: Some(true),
                    ..Default::default()
                },
                scenario.asker_id,
            )
            .await
            .unwrap();
        assert!(updated.is_helpful);
    }

    #[tokio::test]
    async fn test_content_edit_requires_response_poster() {
        let storage = test_storage().await;
        let scenario = post_question_with_response(&storage).await;
        let responses = ResponseService::new(storage);

        // 提问人不能改别人的回答正文
        let err = responses
            .update_response(
                scenario.response_id,
                UpdateResponseRequest {
                    content: Some("Rewritten by the asker".to_string()),
                    ..Default::default()
                },
                scenario.asker_id,
            )
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E004");

        // 回答人可以
        let updated = responses
            .update_response(
                scenario.response_id,
                UpdateResponseRequest {
                    content: Some("Clarified: the borrow ends at the brace.".to_string()),
                    ..Default::default()
                },
                scenario.helper_id,
            )
            .await
            .unwrap();
        assert_eq!(updated.content, "Clarified: the borrow ends at the brace.");
    }

    #[tokio::test]
    async fn test_helpful_mark_notifies_response_poster_once() {
        let storage = test_storage().await;
        let scenario = post_question_with_response(&storage).await;
        let responses = ResponseService::new(storage.clone());
        let notifications = NotificationService::new(storage);

        responses
            .update_response(
                scenario.response_id,
                UpdateResponseRequest {
                    is_helpful: Some(true),
                    ..Default::default()
                },
                scenario.asker_id,
            )
            .await
            .unwrap();

        let inbox = notifications
            .list_for_recipient(scenario.helper_id, true)
            .await
            .unwrap();
        assert_eq!(inbox.len(), 1);
        assert_eq!(inbox[0].notification_type, NotificationType::HelpfulMark);
        assert_eq!(inbox[0].sender_id, scenario.asker_id);

        // 重复标记已经是 Helpful 的回答不再产生通知
        responses
            .update_response(
                scenario.response_id,
                UpdateResponseRequest {
                    is_helpful: Some(true),
                    ..Default::default()
                },
                scenario.asker_id,
            )
            .await
            .unwrap();
        let inbox = notifications
            .list_for_recipient(scenario.helper_id, false)
            .await
            .unwrap();
        assert_eq!(inbox.len(), 1);
    }

    #[tokio::test]
    async fn test_unmarking_never_notifies() {
        let storage = test_storage().await;
        let scenario = post_question_with_response(&storage).await;
        let responses = ResponseService::new(storage.clone());
        let notifications = NotificationService::new(storage);

        responses
            .update_response(
                scenario.response_id,
                UpdateResponseRequest {
                    is_helpful: Some(true),
                    ..Default::default()
                },
                scenario.asker_id,
            )
            .await
            .unwrap();

        // 取消标记：状态翻转但不新增通知
        let updated = responses
            .update_response(
                scenario.response_id,
                UpdateResponseRequest {
                    is_helpful: Some(false),
                    ..Default::default()
                },
                scenario.asker_id,
            )
            .await
            .unwrap();
        assert!(!updated.is_helpful);

        let inbox = notifications
            .list_for_recipient(scenario.helper_id, false)
            .await
            .unwrap();
        assert_eq!(inbox.len(), 1);
    }

    #[tokio::test]
    async fn test_self_helpful_mark_produces_no_notification() {
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
                title: "Self-answered".to_string(),
                content: "Documenting my own fix.".to_string(),
                is_anonymous: false,
            })
            .await
            .unwrap();

        let response = responses
            .create_response(CreateResponseRequest {
                question_id: question.id,
                poster_id: asker.id,
                content: "Restart fixed it.".to_string(),
                is_anonymous: false,
            })
            .await
            .unwrap();

        // 给自己的回答标记有帮助：状态生效，但不给自己发通知
        let updated = responses
            .update_response(
                response.id,
                UpdateResponseRequest {
                    is_helpful: Some(true),
                    ..Default::default()
                },
                asker.id,
            )
            .await
            .unwrap();
        assert!(updated.is_helpful);

        let inbox = notifications
            .list_for_recipient(asker.id, false)
            .await
            .unwrap();
        assert!(inbox.is_empty());
    }
}
