pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::questions::{
    entities::Question,
    requests::{CreateQuestionRequest, UpdateQuestionRequest},
    responses::{CascadeDeleteResult, QuestionDetail},
};
use crate::storage::Storage;

/// 问题服务
pub struct QuestionService {
    storage: Arc<dyn Storage>,
}

impl QuestionService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> Arc<dyn Storage> {
        self.storage.clone()
    }

    // 创建问题
    pub async fn create_question(&self, question_data: CreateQuestionRequest) -> Result<Question> {
        create::create_question(self, question_data).await
    }

    // 根据问题 ID 获取问题（带发帖人展示名）
    pub async fn get_question(&self, question_id: i64) -> Result<QuestionDetail> {
        get::get_question(self, question_id).await
    }

    // 按排序方式列出课程下的问题
    pub async fn list_for_course(
        &self,
        course_id: i64,
        sort: &str,
    ) -> Result<Vec<QuestionDetail>> {
        list::list_for_course(self, course_id, sort).await
    }

    // 更新问题，仅发帖人可操作
    pub async fn update_question(
        &self,
        question_id: i64,
        update_data: UpdateQuestionRequest,
        acting_student_id: i64,
    ) -> Result<Question> {
        update::update_question(self, question_id, update_data, acting_student_id).await
    }

    // 删除问题及其全部回答与通知，仅发帖人可操作
    pub async fn delete_question(
        &self,
        question_id: i64,
        acting_student_id: i64,
    ) -> Result<CascadeDeleteResult> {
        delete::delete_question(self, question_id, acting_student_id).await
    }
}
