//! 课程存储操作

use std::collections::HashMap;

use super::{SeaOrmStorage, map_unique_violation};
use crate::entity::courses::{ActiveModel, Entity as Courses};
use crate::entity::enrollments::{Column as EnrollmentColumn, Entity as Enrollments};
use crate::entity::questions::{Column as QuestionColumn, Entity as Questions};
use crate::errors::{QAForumError, Result};
use crate::models::courses::{entities::Course, requests::CreateCourseRequest};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 录入课程
    pub async fn create_course_impl(&self, req: CreateCourseRequest) -> Result<Course> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            code: Set(req.code),
            name: Set(req.name),
            section: Set(req.section),
            department: Set(req.department),
            instructor_name: Set(req.instructor_name),
            instructor_email: Set(req.instructor_email),
            term: Set(req.term),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| map_unique_violation(e, "Course code already exists", "录入课程失败"))?;

        Ok(result.into_course())
    }

    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, course_id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(course_id)
            .one(&self.db)
            .await
            .map_err(|e| QAForumError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 列出学生选修的全部课程
    pub async fn list_courses_for_student_impl(&self, student_id: i64) -> Result<Vec<Course>> {
        let enrollments = Enrollments::find()
            .filter(EnrollmentColumn::StudentId.eq(student_id))
            .all(&self.db)
            .await
            .map_err(|e| QAForumError::database_operation(format!("查询选课记录失败: {e}")))?;

        let course_ids: Vec<i64> = enrollments.into_iter().map(|e| e.course_id).collect();
        if course_ids.is_empty() {
            return Ok(Vec::new());
        }

        let courses = Courses::find()
            .filter(crate::entity::courses::Column::Id.is_in(course_ids))
            .order_by_asc(crate::entity::courses::Column::Code)
            .all(&self.db)
            .await
            .map_err(|e| QAForumError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(courses.into_iter().map(|m| m.into_course()).collect())
    }

    /// 统计各课程在时间窗口内新增的问题数
    ///
    /// 单次 GROUP BY 聚合查询覆盖全部课程，窗口内没有新问题的课程不出现在结果里。
    pub async fn count_recent_questions_impl(
        &self,
        course_ids: &[i64],
        window_hours: u64,
    ) -> Result<HashMap<i64, u64>> {
        if course_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let cutoff = chrono::Utc::now().timestamp() - (window_hours as i64) * 3600;

        let rows: Vec<(i64, i64)> = Questions::find()
            .select_only()
            .column(QuestionColumn::CourseId)
            .column_as(QuestionColumn::Id.count(), "question_count")
            .filter(QuestionColumn::CourseId.is_in(course_ids.iter().copied()))
            .filter(QuestionColumn::CreatedAt.gte(cutoff))
            .group_by(QuestionColumn::CourseId)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| QAForumError::database_operation(format!("统计课程新问题失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|(course_id, count)| (course_id, count as u64))
            .collect())
    }
}
