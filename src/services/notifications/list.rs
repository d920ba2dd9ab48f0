use super::NotificationService;
use crate::errors::{QAForumError, Result};
use crate::models::notifications::entities::Notification;
use crate::utils::validate::validate_entity_id;

pub async fn list_for_recipient(
    service: &NotificationService,
    recipient_id: i64,
    unread_only: bool,
) -> Result<Vec<Notification>> {
    validate_entity_id(recipient_id, "recipient").map_err(QAForumError::validation)?;

    service
        .storage()
        .list_notifications_for_recipient(recipient_id, unread_only)
        .await
}
