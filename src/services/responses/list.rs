use std::collections::HashMap;

use super::ResponseService;
use crate::errors::{QAForumError, Result};
use crate::models::responses::{requests::ResponseSort, responses::ResponseDetail};
use crate::services::poster_display_name;
use crate::utils::validate::validate_entity_id;

pub async fn list_for_question(
    service: &ResponseService,
    question_id: i64,
    sort: &str,
) -> Result<Vec<ResponseDetail>> {
    validate_entity_id(question_id, "question").map_err(QAForumError::validation)?;

    let storage = service.storage();

    // 未知排序参数回退为 newest
    let sort = ResponseSort::from_query(sort);
    let responses = storage.list_responses_for_question(question_id, sort).await?;

    // 发帖人姓名一次批量查出
    let mut poster_ids: Vec<i64> = responses.iter().map(|r| r.poster_id).collect();
    poster_ids.sort_unstable();
    poster_ids.dedup();

    let posters: HashMap<i64, _> = storage
        .get_students_by_ids(&poster_ids)
        .await?
        .into_iter()
        .map(|s| (s.id, s))
        .collect();

    Ok(responses
        .into_iter()
        .map(|response| {
            let poster_name =
                poster_display_name(response.is_anonymous, posters.get(&response.poster_id));
            ResponseDetail {
                response,
                poster_name,
            }
        })
        .collect())
}
