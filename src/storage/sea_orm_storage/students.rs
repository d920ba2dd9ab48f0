//! 学生存储操作

use std::collections::HashMap;

use super::{SeaOrmStorage, map_unique_violation};
use crate::entity::enrollments::{
    ActiveModel as EnrollmentActiveModel, Column as EnrollmentColumn, Entity as Enrollments,
};
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{QAForumError, Result};
use crate::models::students::{
    entities::Student,
    requests::{CreateStudentRequest, UpdateStudentRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 注册学生，邮箱写入前统一转为小写
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            first_name: Set(req.first_name),
            last_name: Set(req.last_name),
            email: Set(req.email.to_lowercase()),
            credential_hash: Set(req.credential_hash),
            major: Set(req.major),
            age: Set(req.age),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| map_unique_violation(e, "Email already registered", "注册学生失败"))?;

        Ok(result.into_student(Vec::new()))
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| QAForumError::database_operation(format!("查询学生失败: {e}")))?;

        match result {
            Some(model) => {
                let course_ids = self.list_enrolled_course_ids(id).await?;
                Ok(Some(model.into_student(course_ids)))
            }
            None => Ok(None),
        }
    }

    /// 通过邮箱获取学生
    pub async fn get_student_by_email_impl(&self, email: &str) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(Column::Email.eq(email.to_lowercase()))
            .one(&self.db)
            .await
            .map_err(|e| QAForumError::database_operation(format!("查询学生失败: {e}")))?;

        match result {
            Some(model) => {
                let course_ids = self.list_enrolled_course_ids(model.id).await?;
                Ok(Some(model.into_student(course_ids)))
            }
            None => Ok(None),
        }
    }

    /// 批量获取学生，一次查询带出各自的选课列表
    pub async fn get_students_by_ids_impl(&self, ids: &[i64]) -> Result<Vec<Student>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = Students::find()
            .filter(Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await
            .map_err(|e| QAForumError::database_operation(format!("批量查询学生失败: {e}")))?;

        let enrollments = Enrollments::find()
            .filter(EnrollmentColumn::StudentId.is_in(ids.iter().copied()))
            .all(&self.db)
            .await
            .map_err(|e| QAForumError::database_operation(format!("查询选课记录失败: {e}")))?;

        let mut by_student: HashMap<i64, Vec<i64>> = HashMap::new();
        for enrollment in enrollments {
            by_student
                .entry(enrollment.student_id)
                .or_default()
                .push(enrollment.course_id);
        }

        Ok(models
            .into_iter()
            .map(|m| {
                let course_ids = by_student.remove(&m.id).unwrap_or_default();
                m.into_student(course_ids)
            })
            .collect())
    }

    /// 更新学生信息
    ///
    /// 选课列表整体替换：旧记录删除后重建，与资料字段在同一事务中提交。
    pub async fn update_student_impl(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        // 先检查学生是否存在
        let existing = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| QAForumError::database_operation(format!("查询学生失败: {e}")))?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| QAForumError::database_operation(format!("开启事务失败: {e}")))?;

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(first_name) = update.first_name {
            model.first_name = Set(first_name);
        }

        if let Some(last_name) = update.last_name {
            model.last_name = Set(last_name);
        }

        if let Some(major) = update.major {
            model.major = Set(major);
        }

        if let Some(age) = update.age {
            model.age = Set(age);
        }

        model
            .update(&txn)
            .await
            .map_err(|e| QAForumError::database_operation(format!("更新学生失败: {e}")))?;

        if let Some(course_ids) = update.enrolled_course_ids {
            Enrollments::delete_many()
                .filter(EnrollmentColumn::StudentId.eq(id))
                .exec(&txn)
                .await
                .map_err(|e| QAForumError::database_operation(format!("清除选课记录失败: {e}")))?;

            if !course_ids.is_empty() {
                let rows = course_ids.into_iter().map(|course_id| EnrollmentActiveModel {
                    course_id: Set(course_id),
                    student_id: Set(id),
                    enrolled_at: Set(now),
                    ..Default::default()
                });

                Enrollments::insert_many(rows)
                    .exec(&txn)
                    .await
                    .map_err(|e| {
                        QAForumError::database_operation(format!("写入选课记录失败: {e}"))
                    })?;
            }
        }

        txn.commit()
            .await
            .map_err(|e| QAForumError::database_operation(format!("提交事务失败: {e}")))?;

        self.get_student_by_id_impl(id).await
    }

    /// 删除学生
    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let result = Students::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| QAForumError::database_operation(format!("删除学生失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 学生的选课课程 ID 列表
    async fn list_enrolled_course_ids(&self, student_id: i64) -> Result<Vec<i64>> {
        let enrollments = Enrollments::find()
            .filter(EnrollmentColumn::StudentId.eq(student_id))
            .order_by_asc(EnrollmentColumn::CourseId)
            .all(&self.db)
            .await
            .map_err(|e| QAForumError::database_operation(format!("查询选课记录失败: {e}")))?;

        Ok(enrollments.into_iter().map(|e| e.course_id).collect())
    }
}
