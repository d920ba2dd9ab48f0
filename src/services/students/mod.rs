pub mod create;
pub mod delete;
pub mod get;
pub mod update;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::students::{
    entities::Student,
    requests::{CreateStudentRequest, UpdateStudentRequest},
};
use crate::storage::Storage;

/// 学生身份服务
pub struct StudentService {
    storage: Arc<dyn Storage>,
}

impl StudentService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> Arc<dyn Storage> {
        self.storage.clone()
    }

    // 注册学生
    pub async fn create_student(&self, student_data: CreateStudentRequest) -> Result<Student> {
        create::create_student(self, student_data).await
    }

    // 根据学生 ID 获取学生信息
    pub async fn get_student(&self, student_id: i64) -> Result<Student> {
        get::get_student(self, student_id).await
    }

    // 根据邮箱获取学生信息
    pub async fn find_by_email(&self, email: &str) -> Result<Student> {
        get::find_by_email(self, email).await
    }

    // 更新学生信息
    pub async fn update_student(
        &self,
        student_id: i64,
        update_data: UpdateStudentRequest,
    ) -> Result<Student> {
        update::update_student(self, student_id, update_data).await
    }

    // 删除学生
    pub async fn delete_student(&self, student_id: i64) -> Result<()> {
        delete::delete_student(self, student_id).await
    }
}
