use super::CourseService;
use crate::errors::{QAForumError, Result};
use crate::models::courses::entities::Course;
use crate::utils::validate::validate_entity_id;

pub async fn get_course(service: &CourseService, course_id: i64) -> Result<Course> {
    validate_entity_id(course_id, "course").map_err(QAForumError::validation)?;

    service
        .storage()
        .get_course_by_id(course_id)
        .await?
        .ok_or_else(|| QAForumError::not_found(format!("Course {course_id} not found")))
}

#[cfg(test)]
mod tests {
    use crate::services::CourseService;
    use crate::services::test_support::{seed_course, test_storage};

    #[tokio::test]
    async fn test_get_course_by_id() {
        let storage = test_storage().await;
        let course = seed_course(&storage, "CS-3420").await;
        let service = CourseService::new(storage);

        let found = service.get_course(course.id).await.unwrap();
        assert_eq!(found.code, "CS-3420");

        let err = service.get_course(course.id + 100).await.unwrap_err();
        assert_eq!(err.code(), "E002");

        // 非法 ID 在触达存储层之前就被拒绝
        let err = service.get_course(-1).await.unwrap_err();
        assert_eq!(err.code(), "E001");
    }
}
