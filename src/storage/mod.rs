use std::collections::HashMap;
use std::sync::Arc;

use crate::models::{
    courses::{entities::Course, requests::CreateCourseRequest},
    notifications::{entities::Notification, requests::CreateNotificationRequest},
    questions::{
        entities::Question,
        requests::{CreateQuestionRequest, QuestionSort, UpdateQuestionRequest},
        responses::CascadeDeleteResult,
    },
    responses::{
        entities::Response,
        requests::{CreateResponseRequest, ResponseSort, UpdateResponseRequest},
    },
    students::{
        entities::Student,
        requests::{CreateStudentRequest, UpdateStudentRequest},
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 学生管理方法
    // 注册学生
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    // 通过ID获取学生信息
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 通过邮箱获取学生信息（邮箱写入时已统一转为小写）
    async fn get_student_by_email(&self, email: &str) -> Result<Option<Student>>;
    // 批量获取学生，用于列表读取时一次性解析发帖人姓名
    async fn get_students_by_ids(&self, ids: &[i64]) -> Result<Vec<Student>>;
    // 更新学生信息
    async fn update_student(&self, id: i64, update: UpdateStudentRequest)
    -> Result<Option<Student>>;
    // 删除学生
    async fn delete_student(&self, id: i64) -> Result<bool>;

    /// 课程管理方法
    // 录入课程
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    // 通过ID获取课程信息
    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>>;
    // 列出学生选修的全部课程
    async fn list_courses_for_student(&self, student_id: i64) -> Result<Vec<Course>>;
    // 统计各课程在时间窗口内新增的问题数，一次聚合查询完成
    async fn count_recent_questions(
        &self,
        course_ids: &[i64],
        window_hours: u64,
    ) -> Result<HashMap<i64, u64>>;

    /// 问题管理方法
    async fn create_question(&self, question: CreateQuestionRequest) -> Result<Question>;
    async fn get_question_by_id(&self, question_id: i64) -> Result<Option<Question>>;
    async fn list_questions_for_course(
        &self,
        course_id: i64,
        sort: QuestionSort,
    ) -> Result<Vec<Question>>;
    async fn update_question(
        &self,
        question_id: i64,
        update: UpdateQuestionRequest,
    ) -> Result<Option<Question>>;
    // 级联删除：回答 → 通知 → 问题，整体在一个事务中执行
    async fn delete_question_cascade(&self, question_id: i64)
    -> Result<Option<CascadeDeleteResult>>;

    /// 回答管理方法
    async fn create_response(&self, response: CreateResponseRequest) -> Result<Response>;
    async fn get_response_by_id(&self, response_id: i64) -> Result<Option<Response>>;
    async fn list_responses_for_question(
        &self,
        question_id: i64,
        sort: ResponseSort,
    ) -> Result<Vec<Response>>;
    async fn update_response(
        &self,
        response_id: i64,
        update: UpdateResponseRequest,
    ) -> Result<Option<Response>>;
    async fn delete_response(&self, response_id: i64) -> Result<bool>;
    // 级联辅助：删除问题下的全部回答
    async fn delete_responses_by_question(&self, question_id: i64) -> Result<u64>;

    /// 通知管理方法
    async fn create_notification(
        &self,
        notification: CreateNotificationRequest,
    ) -> Result<Notification>;
    async fn get_notification_by_id(&self, notification_id: i64) -> Result<Option<Notification>>;
    // 按创建时间倒序列出收件人的通知
    async fn list_notifications_for_recipient(
        &self,
        recipient_id: i64,
        unread_only: bool,
    ) -> Result<Vec<Notification>>;
    // 标记单条通知为已读（幂等）
    async fn mark_notification_read(&self, notification_id: i64) -> Result<Option<Notification>>;
    // 标记收件人全部通知为已读，返回实际翻转的条数
    async fn mark_all_notifications_read(&self, recipient_id: i64) -> Result<u64>;
    async fn count_unread_notifications(&self, recipient_id: i64) -> Result<u64>;
    // 级联辅助：删除问题下的全部通知
    async fn delete_notifications_by_question(&self, question_id: i64) -> Result<u64>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
