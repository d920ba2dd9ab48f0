use serde::Deserialize;

use super::entities::NotificationType;

// 通知创建请求
//
// message 由触发方渲染完成后传入，通知引擎不做模板展开。
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateNotificationRequest {
    pub recipient_id: i64,
    pub question_id: i64,
    pub sender_id: i64,
    pub notification_type: NotificationType,
    pub message: String,
}
