pub mod count;
pub mod create;
pub mod list;
pub mod read;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::notifications::{
    entities::Notification,
    requests::CreateNotificationRequest,
    responses::{MarkAllReadResponse, UnreadCountResponse},
};
use crate::storage::Storage;

/// 通知服务
pub struct NotificationService {
    storage: Arc<dyn Storage>,
}

impl NotificationService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> Arc<dyn Storage> {
        self.storage.clone()
    }

    // 创建通知（文案由触发方预先渲染）
    pub async fn create_notification(
        &self,
        notification_data: CreateNotificationRequest,
    ) -> Result<Notification> {
        create::create_notification(&self.storage(), notification_data).await
    }

    // 按创建时间倒序列出收件人的通知
    pub async fn list_for_recipient(
        &self,
        recipient_id: i64,
        unread_only: bool,
    ) -> Result<Vec<Notification>> {
        list::list_for_recipient(self, recipient_id, unread_only).await
    }

    // 标记单条通知为已读（幂等）
    pub async fn mark_read(&self, notification_id: i64) -> Result<Notification> {
        read::mark_read(self, notification_id).await
    }

    // 标记收件人全部通知为已读
    pub async fn mark_all_read(&self, recipient_id: i64) -> Result<MarkAllReadResponse> {
        read::mark_all_read(self, recipient_id).await
    }

    // 收件人未读通知数量
    pub async fn count_unread(&self, recipient_id: i64) -> Result<UnreadCountResponse> {
        count::count_unread(self, recipient_id).await
    }
}
