use serde::{Deserialize, Serialize};

// 学生实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    pub credential_hash: String,
    pub major: String,
    pub age: i32,
    // 选课列表，读取时从选课关联表填充
    pub enrolled_course_ids: Vec<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_hash_never_serialized() {
        let student = Student {
            id: 1,
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane.doe@university.edu".to_string(),
            credential_hash: "secret-hash".to_string(),
            major: "Computer Science".to_string(),
            age: 20,
            enrolled_course_ids: vec![],
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };

        let json = serde_json::to_string(&student).unwrap();
        assert!(!json.contains("secret-hash"));
        assert!(!json.contains("credential_hash"));
    }

    #[test]
    fn test_full_name() {
        let student = Student {
            id: 1,
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane.doe@university.edu".to_string(),
            credential_hash: String::new(),
            major: "Biology".to_string(),
            age: 19,
            enrolled_course_ids: vec![],
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };
        assert_eq!(student.full_name(), "Jane Doe");
    }
}
