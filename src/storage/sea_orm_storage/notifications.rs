//! 通知存储操作

use super::SeaOrmStorage;
use crate::entity::notifications::{ActiveModel, Column, Entity as Notifications};
use crate::errors::{QAForumError, Result};
use crate::models::notifications::{
    entities::Notification, requests::CreateNotificationRequest,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, sea_query::Expr,
};

/// 删除问题下的全部通知
///
/// 同时服务于独立调用和级联删除事务，连接类型由调用方决定。
pub(super) async fn delete_by_question<C: ConnectionTrait>(
    conn: &C,
    question_id: i64,
) -> Result<u64> {
    let result = Notifications::delete_many()
        .filter(Column::QuestionId.eq(question_id))
        .exec(conn)
        .await
        .map_err(|e| QAForumError::database_operation(format!("删除问题通知失败: {e}")))?;

    Ok(result.rows_affected)
}

impl SeaOrmStorage {
    /// 创建通知，is_read 强制为 false
    pub async fn create_notification_impl(
        &self,
        req: CreateNotificationRequest,
    ) -> Result<Notification> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            recipient_id: Set(req.recipient_id),
            question_id: Set(req.question_id),
            sender_id: Set(req.sender_id),
            notification_type: Set(req.notification_type.to_string()),
            message: Set(req.message),
            is_read: Set(false),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| QAForumError::database_operation(format!("创建通知失败: {e}")))?;

        Ok(result.into_notification())
    }

    /// 通过 ID 获取通知
    pub async fn get_notification_by_id_impl(
        &self,
        notification_id: i64,
    ) -> Result<Option<Notification>> {
        let result = Notifications::find_by_id(notification_id)
            .one(&self.db)
            .await
            .map_err(|e| QAForumError::database_operation(format!("查询通知失败: {e}")))?;

        Ok(result.map(|m| m.into_notification()))
    }

    /// 按创建时间倒序列出收件人的通知
    pub async fn list_notifications_for_recipient_impl(
        &self,
        recipient_id: i64,
        unread_only: bool,
    ) -> Result<Vec<Notification>> {
        let mut select = Notifications::find().filter(Column::RecipientId.eq(recipient_id));

        // 未读筛选
        if unread_only {
            select = select.filter(Column::IsRead.eq(false));
        }

        // 排序
        select = select
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id);

        let notifications = select
            .all(&self.db)
            .await
            .map_err(|e| QAForumError::database_operation(format!("查询通知列表失败: {e}")))?;

        Ok(notifications
            .into_iter()
            .map(|m| m.into_notification())
            .collect())
    }

    /// 标记通知为已读
    ///
    /// 幂等：已读通知再次标记不报错，原样返回。
    pub async fn mark_notification_read_impl(
        &self,
        notification_id: i64,
    ) -> Result<Option<Notification>> {
        let existing = Notifications::find_by_id(notification_id)
            .one(&self.db)
            .await
            .map_err(|e| QAForumError::database_operation(format!("查询通知失败: {e}")))?;

        let Some(model) = existing else {
            return Ok(None);
        };

        if !model.is_read {
            Notifications::update_many()
                .col_expr(Column::IsRead, Expr::value(true))
                .filter(Column::Id.eq(notification_id))
                .exec(&self.db)
                .await
                .map_err(|e| QAForumError::database_operation(format!("标记通知已读失败: {e}")))?;
        }

        self.get_notification_by_id_impl(notification_id).await
    }

    /// 标记收件人全部通知为已读，返回实际翻转的条数
    pub async fn mark_all_notifications_read_impl(&self, recipient_id: i64) -> Result<u64> {
        let result = Notifications::update_many()
            .col_expr(Column::IsRead, Expr::value(true))
            .filter(Column::RecipientId.eq(recipient_id))
            .filter(Column::IsRead.eq(false))
            .exec(&self.db)
            .await
            .map_err(|e| QAForumError::database_operation(format!("标记全部通知已读失败: {e}")))?;

        Ok(result.rows_affected)
    }

    /// 收件人未读通知数量
    pub async fn count_unread_notifications_impl(&self, recipient_id: i64) -> Result<u64> {
        let count = Notifications::find()
            .filter(Column::RecipientId.eq(recipient_id))
            .filter(Column::IsRead.eq(false))
            .count(&self.db)
            .await
            .map_err(|e| QAForumError::database_operation(format!("查询未读通知数量失败: {e}")))?;

        Ok(count)
    }

    /// 删除问题下的全部通知（级联辅助）
    pub async fn delete_notifications_by_question_impl(&self, question_id: i64) -> Result<u64> {
        delete_by_question(&self.db, question_id).await
    }
}
