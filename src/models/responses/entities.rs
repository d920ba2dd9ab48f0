use serde::{Deserialize, Serialize};

// 回答实体
//
// 状态机：NotHelpful ⇄ Helpful（is_helpful），与正文编辑相互独立。
// is_helpful 只能由所属问题的发帖人切换，而不是回答的发帖人。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    pub id: i64,
    pub question_id: i64,
    // 发帖人，创建后不可变更
    pub poster_id: i64,
    pub content: String,
    // 匿名标记，创建时固定
    pub is_anonymous: bool,
    pub is_helpful: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
