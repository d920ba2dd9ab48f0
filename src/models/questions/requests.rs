use serde::{Deserialize, Serialize};

// 问题列表排序方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionSort {
    Newest,
    Oldest,
    Answered,
    Unanswered,
}

impl QuestionSort {
    pub const NEWEST: &'static str = "newest";
    pub const OLDEST: &'static str = "oldest";
    pub const ANSWERED: &'static str = "answered";
    pub const UNANSWERED: &'static str = "unanswered";

    /// 从查询参数解析，未知取值回退为 newest
    pub fn from_query(s: &str) -> Self {
        s.parse().unwrap_or(QuestionSort::Newest)
    }
}

impl<'de> Deserialize<'de> for QuestionSort {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(QuestionSort::from_query(&s))
    }
}

impl std::fmt::Display for QuestionSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuestionSort::Newest => write!(f, "{}", QuestionSort::NEWEST),
            QuestionSort::Oldest => write!(f, "{}", QuestionSort::OLDEST),
            QuestionSort::Answered => write!(f, "{}", QuestionSort::ANSWERED),
            QuestionSort::Unanswered => write!(f, "{}", QuestionSort::UNANSWERED),
        }
    }
}

impl std::str::FromStr for QuestionSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            QuestionSort::NEWEST => Ok(QuestionSort::Newest),
            QuestionSort::OLDEST => Ok(QuestionSort::Oldest),
            QuestionSort::ANSWERED => Ok(QuestionSort::Answered),
            QuestionSort::UNANSWERED => Ok(QuestionSort::Unanswered),
            _ => Err(format!("Invalid question sort: {s}")),
        }
    }
}

// 问题创建请求
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateQuestionRequest {
    pub course_id: i64,
    pub poster_id: i64,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub is_anonymous: bool,
}

// 问题更新请求
//
// 只允许修改标题、正文和解决状态；course_id、poster_id、is_anonymous
// 等字段创建后不可变更，出现即拒绝。
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateQuestionRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub is_resolved: Option<bool>,
}

impl UpdateQuestionRequest {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.is_resolved.is_none()
    }
}
