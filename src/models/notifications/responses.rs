use serde::Serialize;

/// 未读通知数量响应
#[derive(Debug, Clone, Copy, Serialize)]
pub struct UnreadCountResponse {
    pub unread_count: u64,
}

/// 标记全部已读响应
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MarkAllReadResponse {
    pub modified_count: u64,
}
