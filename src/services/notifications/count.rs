use super::NotificationService;
use crate::errors::{QAForumError, Result};
use crate::models::notifications::responses::UnreadCountResponse;
use crate::utils::validate::validate_entity_id;

pub async fn count_unread(
    service: &NotificationService,
    recipient_id: i64,
) -> Result<UnreadCountResponse> {
    validate_entity_id(recipient_id, "recipient").map_err(QAForumError::validation)?;

    let unread_count = service
        .storage()
        .count_unread_notifications(recipient_id)
        .await?;

    Ok(UnreadCountResponse { unread_count })
}
