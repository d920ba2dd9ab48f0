use std::collections::HashMap;

use super::CourseService;
use crate::errors::{QAForumError, Result};
use crate::utils::validate::validate_entity_id;

/// 缺省统计窗口（小时）
pub const DEFAULT_RECENT_WINDOW_HOURS: u64 = 24;

// 各课程近期新问题数量，供 "我的课程" 页一次性展示。
// 全部课程一次聚合查询完成，窗口内没有动静的课程不出现在结果里。
pub async fn count_recent_questions(
    service: &CourseService,
    course_ids: &[i64],
    window_hours: Option<u64>,
) -> Result<HashMap<i64, u64>> {
    for &course_id in course_ids {
        validate_entity_id(course_id, "course").map_err(QAForumError::validation)?;
    }

    let window = window_hours.unwrap_or(DEFAULT_RECENT_WINDOW_HOURS);

    service
        .storage()
        .count_recent_questions(course_ids, window)
        .await
}
