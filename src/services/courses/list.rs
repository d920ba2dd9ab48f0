use super::CourseService;
use crate::errors::{QAForumError, Result};
use crate::models::courses::entities::Course;
use crate::utils::validate::validate_entity_id;

pub async fn list_for_student(service: &CourseService, student_id: i64) -> Result<Vec<Course>> {
    validate_entity_id(student_id, "student").map_err(QAForumError::validation)?;

    service.storage().list_courses_for_student(student_id).await
}

#[cfg(test)]
mod tests {
    use crate::services::CourseService;
    use crate::services::test_support::{enroll, seed_course, seed_student, test_storage};

    #[tokio::test]
    async fn test_lists_only_enrolled_courses() {
        let storage = test_storage().await;
        let student = seed_student(&storage, "Jane", "Doe", "jane.doe@university.edu").await;
        let algebra = seed_course(&storage, "MATH-2210").await;
        let _systems = seed_course(&storage, "CS-4410").await;
        enroll(&storage, student.id, vec![algebra.id]).await;

        let service = CourseService::new(storage);
        let courses = service.list_for_student(student.id).await.unwrap();

        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].id, algebra.id);
    }

    #[tokio::test]
    async fn test_unenrolled_student_gets_empty_list() {
        let storage = test_storage().await;
        let student = seed_student(&storage, "Jane", "Doe", "jane.doe@university.edu").await;

        let service = CourseService::new(storage);
        let courses = service.list_for_student(student.id).await.unwrap();

        assert!(courses.is_empty());
    }
}
