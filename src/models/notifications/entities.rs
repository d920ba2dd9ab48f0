use serde::{Deserialize, Serialize};

// 通知类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    NewResponse, // 问题收到新回答
    HelpfulMark, // 回答被标记为有帮助
}

impl NotificationType {
    pub const NEW_RESPONSE: &'static str = "new_response";
    pub const HELPFUL_MARK: &'static str = "helpful_mark";
}

impl<'de> Deserialize<'de> for NotificationType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            NotificationType::NEW_RESPONSE => Ok(NotificationType::NewResponse),
            NotificationType::HELPFUL_MARK => Ok(NotificationType::HelpfulMark),
            _ => Err(serde::de::Error::custom(format!(
                "Invalid notification type: '{s}'. Supported: new_response, helpful_mark"
            ))),
        }
    }
}

impl std::fmt::Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationType::NewResponse => write!(f, "{}", NotificationType::NEW_RESPONSE),
            NotificationType::HelpfulMark => write!(f, "{}", NotificationType::HELPFUL_MARK),
        }
    }
}

impl std::str::FromStr for NotificationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new_response" => Ok(NotificationType::NewResponse),
            "helpful_mark" => Ok(NotificationType::HelpfulMark),
            _ => Err(format!("Invalid notification type: {s}")),
        }
    }
}

// 通知实体
//
// 除 is_read 翻转外不可变，只能随所属问题级联删除。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub recipient_id: i64,
    pub question_id: i64,
    pub sender_id: i64,
    pub notification_type: NotificationType,
    // 由触发方预先渲染好的文案
    pub message: String,
    pub is_read: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
