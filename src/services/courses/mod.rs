pub mod activity;
pub mod create;
pub mod get;
pub mod list;

use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::Result;
use crate::models::courses::{entities::Course, requests::CreateCourseRequest};
use crate::storage::Storage;

/// 课程注册服务
pub struct CourseService {
    storage: Arc<dyn Storage>,
}

impl CourseService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> Arc<dyn Storage> {
        self.storage.clone()
    }

    // 录入课程
    pub async fn create_course(&self, course_data: CreateCourseRequest) -> Result<Course> {
        create::create_course(self, course_data).await
    }

    // 根据课程 ID 获取课程信息
    pub async fn get_course(&self, course_id: i64) -> Result<Course> {
        get::get_course(self, course_id).await
    }

    // 列出学生选修的全部课程
    pub async fn list_for_student(&self, student_id: i64) -> Result<Vec<Course>> {
        list::list_for_student(self, student_id).await
    }

    // 统计各课程在时间窗口内新增的问题数（缺省窗口 24 小时）
    pub async fn count_recent_questions(
        &self,
        course_ids: &[i64],
        window_hours: Option<u64>,
    ) -> Result<HashMap<i64, u64>> {
        activity::count_recent_questions(self, course_ids, window_hours).await
    }
}
