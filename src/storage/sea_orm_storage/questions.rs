//! 问题存储操作

use super::SeaOrmStorage;
use crate::entity::questions::{ActiveModel, Column, Entity as Questions};
use crate::errors::{QAForumError, Result};
use crate::models::questions::{
    entities::Question,
    requests::{CreateQuestionRequest, QuestionSort, UpdateQuestionRequest},
    responses::CascadeDeleteResult,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建问题，初始状态一律为未解决
    pub async fn create_question_impl(&self, req: CreateQuestionRequest) -> Result<Question> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            course_id: Set(req.course_id),
            poster_id: Set(req.poster_id),
            title: Set(req.title),
            content: Set(req.content),
            is_anonymous: Set(req.is_anonymous),
            is_resolved: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| QAForumError::database_operation(format!("创建问题失败: {e}")))?;

        Ok(result.into_question())
    }

    /// 通过 ID 获取问题
    pub async fn get_question_by_id_impl(&self, question_id: i64) -> Result<Option<Question>> {
        let result = Questions::find_by_id(question_id)
            .one(&self.db)
            .await
            .map_err(|e| QAForumError::database_operation(format!("查询问题失败: {e}")))?;

        Ok(result.map(|m| m.into_question()))
    }

    /// 按排序方式列出课程下的问题
    ///
    /// answered/unanswered 在 is_resolved 上过滤并按创建时间倒序；
    /// 同一时间戳内用主键作为稳定的次级排序。
    pub async fn list_questions_for_course_impl(
        &self,
        course_id: i64,
        sort: QuestionSort,
    ) -> Result<Vec<Question>> {
        let mut select = Questions::find().filter(Column::CourseId.eq(course_id));

        select = match sort {
            QuestionSort::Newest => select
                .order_by_desc(Column::CreatedAt)
                .order_by_desc(Column::Id),
            QuestionSort::Oldest => select
                .order_by_asc(Column::CreatedAt)
                .order_by_asc(Column::Id),
            QuestionSort::Answered => select
                .filter(Column::IsResolved.eq(true))
                .order_by_desc(Column::CreatedAt)
                .order_by_desc(Column::Id),
            QuestionSort::Unanswered => select
                .filter(Column::IsResolved.eq(false))
                .order_by_desc(Column::CreatedAt)
                .order_by_desc(Column::Id),
        };

        let questions = select
            .all(&self.db)
            .await
            .map_err(|e| QAForumError::database_operation(format!("查询问题列表失败: {e}")))?;

        Ok(questions.into_iter().map(|m| m.into_question()).collect())
    }

    /// 更新问题信息
    pub async fn update_question_impl(
        &self,
        question_id: i64,
        update: UpdateQuestionRequest,
    ) -> Result<Option<Question>> {
        // 先检查问题是否存在
        let existing = self.get_question_by_id_impl(question_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(question_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(content) = update.content {
            model.content = Set(content);
        }

        if let Some(is_resolved) = update.is_resolved {
            model.is_resolved = Set(is_resolved);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| QAForumError::database_operation(format!("更新问题失败: {e}")))?;

        self.get_question_by_id_impl(question_id).await
    }

    /// 级联删除问题
    ///
    /// 依赖方先删：回答 → 通知 → 问题，整体在一个事务中提交；
    /// 每一步都是按存在删除，事务失败后重跑是安全的。
    pub async fn delete_question_cascade_impl(
        &self,
        question_id: i64,
    ) -> Result<Option<CascadeDeleteResult>> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| QAForumError::database_operation(format!("开启事务失败: {e}")))?;

        let existing = Questions::find_by_id(question_id)
            .one(&txn)
            .await
            .map_err(|e| QAForumError::database_operation(format!("查询问题失败: {e}")))?;
        if existing.is_none() {
            return Ok(None);
        }

        let responses_deleted = super::responses::delete_by_question(&txn, question_id).await?;
        let notifications_deleted =
            super::notifications::delete_by_question(&txn, question_id).await?;

        let result = Questions::delete_by_id(question_id)
            .exec(&txn)
            .await
            .map_err(|e| QAForumError::database_operation(format!("删除问题失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| QAForumError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(Some(CascadeDeleteResult {
            questions_deleted: result.rows_affected,
            responses_deleted,
            notifications_deleted,
        }))
    }
}
