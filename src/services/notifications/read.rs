use super::NotificationService;
use crate::errors::{QAForumError, Result};
use crate::models::notifications::{entities::Notification, responses::MarkAllReadResponse};
use crate::utils::validate::validate_entity_id;

// 标记单条通知为已读。幂等：重复标记成功返回，不视为错误。
pub async fn mark_read(
    service: &NotificationService,
    notification_id: i64,
) -> Result<Notification> {
    validate_entity_id(notification_id, "notification").map_err(QAForumError::validation)?;

    service
        .storage()
        .mark_notification_read(notification_id)
        .await?
        .ok_or_else(|| {
            QAForumError::not_found(format!("Notification {notification_id} not found"))
        })
}

// 标记收件人全部未读通知为已读。
// 收件人没有未读通知（或根本不存在）时返回 0，从不报错。
pub async fn mark_all_read(
    service: &NotificationService,
    recipient_id: i64,
) -> Result<MarkAllReadResponse> {
    validate_entity_id(recipient_id, "recipient").map_err(QAForumError::validation)?;

    let modified_count = service
        .storage()
        .mark_all_notifications_read(recipient_id)
        .await?;

    Ok(MarkAllReadResponse { modified_count })
}
