use serde::Deserialize;

// 课程创建请求（录入用）
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateCourseRequest {
    pub code: String,
    pub name: String,
    pub section: String,
    pub department: String,
    pub instructor_name: String,
    pub instructor_email: String,
    pub term: String,
}
