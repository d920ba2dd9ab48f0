use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    // 课程ID
    pub id: i64,
    // 课程代码（全局唯一，如 CS-3420）
    pub code: String,
    // 课程名称
    pub name: String,
    // 班次
    pub section: String,
    // 开课院系
    pub department: String,
    // 授课教师
    pub instructor_name: String,
    pub instructor_email: String,
    // 学期
    pub term: String,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
