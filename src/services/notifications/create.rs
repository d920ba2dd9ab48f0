use std::sync::Arc;

use crate::errors::{QAForumError, Result};
use crate::models::notifications::{entities::Notification, requests::CreateNotificationRequest};
use crate::storage::Storage;
use crate::utils::validate::{validate_entity_id, validate_notification_message};

// 通知创建是回答创建与有帮助标记的副作用入口，
// 三个关联 ID 必须全部指向真实存在的实体，否则按非法输入拒绝。
pub(crate) async fn create_notification(
    storage: &Arc<dyn Storage>,
    notification_data: CreateNotificationRequest,
) -> Result<Notification> {
    validate_entity_id(notification_data.recipient_id, "recipient")
        .map_err(QAForumError::validation)?;
    validate_entity_id(notification_data.sender_id, "sender").map_err(QAForumError::validation)?;
    validate_entity_id(notification_data.question_id, "question")
        .map_err(QAForumError::validation)?;
    validate_notification_message(&notification_data.message).map_err(QAForumError::validation)?;

    if storage
        .get_student_by_id(notification_data.recipient_id)
        .await?
        .is_none()
    {
        return Err(QAForumError::validation(format!(
            "Recipient {} does not exist",
            notification_data.recipient_id
        )));
    }

    if storage
        .get_student_by_id(notification_data.sender_id)
        .await?
        .is_none()
    {
        return Err(QAForumError::validation(format!(
            "Sender {} does not exist",
            notification_data.sender_id
        )));
    }

    if storage
        .get_question_by_id(notification_data.question_id)
        .await?
        .is_none()
    {
        return Err(QAForumError::validation(format!(
            "Question {} does not exist",
            notification_data.question_id
        )));
    }

    storage.create_notification(notification_data).await
}
