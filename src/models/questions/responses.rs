use serde::Serialize;

use super::entities::Question;

/// 带发帖人展示名的问题
///
/// poster_name 是读取时即时计算的派生字段，从不落库：
/// 匿名问题展示 "Anonymous"，否则展示发帖人全名。
#[derive(Debug, Clone, Serialize)]
pub struct QuestionDetail {
    #[serde(flatten)]
    pub question: Question,
    pub poster_name: String,
}

/// 问题级联删除结果
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CascadeDeleteResult {
    pub questions_deleted: u64,
    pub responses_deleted: u64,
    pub notifications_deleted: u64,
}
