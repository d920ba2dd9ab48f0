use serde::Serialize;

use super::entities::Response;

/// 带发帖人展示名的回答，poster_name 派生规则与问题一致
#[derive(Debug, Clone, Serialize)]
pub struct ResponseDetail {
    #[serde(flatten)]
    pub response: Response,
    pub poster_name: String,
}
