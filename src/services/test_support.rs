//! 服务层测试辅助：内存存储与数据播种

use std::sync::Arc;

use crate::models::courses::{entities::Course, requests::CreateCourseRequest};
use crate::models::students::{
    entities::Student,
    requests::{CreateStudentRequest, UpdateStudentRequest},
};
use crate::storage::Storage;
use crate::storage::sea_orm_storage::test_harness::open_test_storage;

pub(crate) async fn test_storage() -> Arc<dyn Storage> {
    Arc::new(open_test_storage().await)
}

pub(crate) async fn seed_student(
    storage: &Arc<dyn Storage>,
    first_name: &str,
    last_name: &str,
    email: &str,
) -> Student {
    storage
        .create_student(CreateStudentRequest {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            credential_hash: "argon2id-placeholder".to_string(),
            major: "Computer Science".to_string(),
            age: 20,
        })
        .await
        .expect("failed to seed student")
}

pub(crate) async fn seed_course(storage: &Arc<dyn Storage>, code: &str) -> Course {
    storage
        .create_course(CreateCourseRequest {
            code: code.to_string(),
            name: "Data Structures and Algorithms".to_string(),
            section: "001".to_string(),
            department: "Computer Science".to_string(),
            instructor_name: "Dr. Sandra Liu".to_string(),
            instructor_email: "sandra.liu@university.edu".to_string(),
            term: "Fall 2025".to_string(),
        })
        .await
        .expect("failed to seed course")
}

pub(crate) async fn enroll(storage: &Arc<dyn Storage>, student_id: i64, course_ids: Vec<i64>) {
    storage
        .update_student(
            student_id,
            UpdateStudentRequest {
                enrolled_course_ids: Some(course_ids),
                ..Default::default()
            },
        )
        .await
        .expect("failed to enroll student");
}
