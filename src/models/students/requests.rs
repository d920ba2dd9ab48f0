use serde::Deserialize;

// 学生注册请求
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateStudentRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub credential_hash: String,
    pub major: String,
    pub age: i32,
}

// 学生资料更新请求
//
// 只允许修改姓名、专业、年龄和选课列表，其余字段一律拒绝。
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateStudentRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub major: Option<String>,
    pub age: Option<i32>,
    pub enrolled_course_ids: Option<Vec<i64>>,
}

impl UpdateStudentRequest {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.major.is_none()
            && self.age.is_none()
            && self.enrolled_course_ids.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_rejects_unknown_fields() {
        // email 与 credential_hash 不在允许修改的字段列表中
        let payload = serde_json::json!({ "email": "new@university.edu" });
        assert!(serde_json::from_value::<UpdateStudentRequest>(payload).is_err());

        let payload = serde_json::json!({ "credential_hash": "x" });
        assert!(serde_json::from_value::<UpdateStudentRequest>(payload).is_err());
    }

    #[test]
    fn test_update_empty_detection() {
        let update: UpdateStudentRequest = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(update.is_empty());

        let update: UpdateStudentRequest =
            serde_json::from_value(serde_json::json!({ "major": "Physics" })).unwrap();
        assert!(!update.is_empty());
    }
}
