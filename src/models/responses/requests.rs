use serde::Deserialize;

// 回答列表排序方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseSort {
    Newest,
    Oldest,
}

impl ResponseSort {
    pub const NEWEST: &'static str = "newest";
    pub const OLDEST: &'static str = "oldest";

    /// 从查询参数解析，未知取值回退为 newest
    pub fn from_query(s: &str) -> Self {
        s.parse().unwrap_or(ResponseSort::Newest)
    }
}

impl std::fmt::Display for ResponseSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResponseSort::Newest => write!(f, "{}", ResponseSort::NEWEST),
            ResponseSort::Oldest => write!(f, "{}", ResponseSort::OLDEST),
        }
    }
}

impl std::str::FromStr for ResponseSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ResponseSort::NEWEST => Ok(ResponseSort::Newest),
            ResponseSort::OLDEST => Ok(ResponseSort::Oldest),
            _ => Err(format!("Invalid response sort: {s}")),
        }
    }
}

// 回答创建请求
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateResponseRequest {
    pub question_id: i64,
    pub poster_id: i64,
    pub content: String,
    #[serde(default)]
    pub is_anonymous: bool,
}

// 回答更新请求
//
// content 的修改权在回答发帖人，is_helpful 的切换权在所属问题的发帖人，
// 两者的鉴权在服务层分别处理。其余字段出现即拒绝。
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateResponseRequest {
    pub content: Option<String>,
    pub is_helpful: Option<bool>,
}

impl UpdateResponseRequest {
    pub fn is_empty(&self) -> bool {
        self.content.is_none() && self.is_helpful.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_from_query() {
        assert_eq!(ResponseSort::from_query("oldest"), ResponseSort::Oldest);
        assert_eq!(ResponseSort::from_query("newest"), ResponseSort::Newest);
        assert_eq!(ResponseSort::from_query("top"), ResponseSort::Newest);
    }

    #[test]
    fn test_update_rejects_unknown_fields() {
        let payload = serde_json::json!({ "poster_id": 12 });
        assert!(serde_json::from_value::<UpdateResponseRequest>(payload).is_err());

        let payload = serde_json::json!({ "question_id": 5 });
        assert!(serde_json::from_value::<UpdateResponseRequest>(payload).is_err());
    }
}
