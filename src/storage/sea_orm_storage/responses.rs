//! 回答存储操作

use super::SeaOrmStorage;
use crate::entity::responses::{ActiveModel, Column, Entity as Responses};
use crate::errors::{QAForumError, Result};
use crate::models::responses::{
    entities::Response,
    requests::{CreateResponseRequest, ResponseSort, UpdateResponseRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

/// 删除问题下的全部回答
///
/// 同时服务于独立调用和级联删除事务，连接类型由调用方决定。
pub(super) async fn delete_by_question<C: ConnectionTrait>(
    conn: &C,
    question_id: i64,
) -> Result<u64> {
    let result = Responses::delete_many()
        .filter(Column::QuestionId.eq(question_id))
        .exec(conn)
        .await
        .map_err(|e| QAForumError::database_operation(format!("删除问题回答失败: {e}")))?;

    Ok(result.rows_affected)
}

impl SeaOrmStorage {
    /// 创建回答，is_helpful 一律初始化为 false
    pub async fn create_response_impl(&self, req: CreateResponseRequest) -> Result<Response> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            question_id: Set(req.question_id),
            poster_id: Set(req.poster_id),
            content: Set(req.content),
            is_anonymous: Set(req.is_anonymous),
            is_helpful: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| QAForumError::database_operation(format!("创建回答失败: {e}")))?;

        Ok(result.into_response())
    }

    /// 通过 ID 获取回答
    pub async fn get_response_by_id_impl(&self, response_id: i64) -> Result<Option<Response>> {
        let result = Responses::find_by_id(response_id)
            .one(&self.db)
            .await
            .map_err(|e| QAForumError::database_operation(format!("查询回答失败: {e}")))?;

        Ok(result.map(|m| m.into_response()))
    }

    /// 按排序方式列出问题下的回答
    pub async fn list_responses_for_question_impl(
        &self,
        question_id: i64,
        sort: ResponseSort,
    ) -> Result<Vec<Response>> {
        let mut select = Responses::find().filter(Column::QuestionId.eq(question_id));

        select = match sort {
            ResponseSort::Newest => select
                .order_by_desc(Column::CreatedAt)
                .order_by_desc(Column::Id),
            ResponseSort::Oldest => select
                .order_by_asc(Column::CreatedAt)
                .order_by_asc(Column::Id),
        };

        let responses = select
            .all(&self.db)
            .await
            .map_err(|e| QAForumError::database_operation(format!("查询回答列表失败: {e}")))?;

        Ok(responses.into_iter().map(|m| m.into_response()).collect())
    }

    /// 更新回答信息
    pub async fn update_response_impl(
        &self,
        response_id: i64,
        update: UpdateResponseRequest,
    ) -> Result<Option<Response>> {
        // 先检查回答是否存在
        let existing = self.get_response_by_id_impl(response_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(response_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(content) = update.content {
            model.content = Set(content);
        }

        if let Some(is_helpful) = update.is_helpful {
            model.is_helpful = Set(is_helpful);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| QAForumError::database_operation(format!("更新回答失败: {e}")))?;

        self.get_response_by_id_impl(response_id).await
    }

    /// 删除回答
    pub async fn delete_response_impl(&self, response_id: i64) -> Result<bool> {
        let result = Responses::delete_by_id(response_id)
            .exec(&self.db)
            .await
            .map_err(|e| QAForumError::database_operation(format!("删除回答失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 删除问题下的全部回答（级联辅助）
    pub async fn delete_responses_by_question_impl(&self, question_id: i64) -> Result<u64> {
        delete_by_question(&self.db, question_id).await
    }
}
