use serde::{Deserialize, Serialize};

// 问题实体
//
// 状态机：Open (is_resolved=false) ⇄ Resolved (is_resolved=true)，
// 仅发帖人可以切换，删除是直接退出状态机而不是一个状态。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub course_id: i64,
    // 发帖人，创建后不可变更
    pub poster_id: i64,
    pub title: String,
    pub content: String,
    // 匿名标记，创建时固定
    pub is_anonymous: bool,
    pub is_resolved: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
