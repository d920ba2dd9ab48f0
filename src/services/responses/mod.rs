pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::responses::{
    entities::Response,
    requests::{CreateResponseRequest, UpdateResponseRequest},
    responses::ResponseDetail,
};
use crate::storage::Storage;

/// 回答服务
pub struct ResponseService {
    storage: Arc<dyn Storage>,
}

impl ResponseService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> Arc<dyn Storage> {
        self.storage.clone()
    }

    // 创建回答，必要时向提问人发送通知
    pub async fn create_response(&self, response_data: CreateResponseRequest) -> Result<Response> {
        create::create_response(self, response_data).await
    }

    // 根据回答 ID 获取回答（带发帖人展示名）
    pub async fn get_response(&self, response_id: i64) -> Result<ResponseDetail> {
        get::get_response(self, response_id).await
    }

    // 按排序方式列出问题下的回答
    pub async fn list_for_question(
        &self,
        question_id: i64,
        sort: &str,
    ) -> Result<Vec<ResponseDetail>> {
        list::list_for_question(self, question_id, sort).await
    }

    // 更新回答：正文归回答发帖人，有帮助标记归提问人
    pub async fn update_response(
        &self,
        response_id: i64,
        update_data: UpdateResponseRequest,
        acting_student_id: i64,
    ) -> Result<Response> {
        update::update_response(self, response_id, update_data, acting_student_id).await
    }

    // 删除回答，仅回答发帖人可操作
    pub async fn delete_response(
        &self,
        response_id: i64,
        acting_student_id: i64,
    ) -> Result<()> {
        delete::delete_response(self, response_id, acting_student_id).await
    }
}
