use std::collections::HashMap;

use super::QuestionService;
use crate::errors::{QAForumError, Result};
use crate::models::questions::{requests::QuestionSort, responses::QuestionDetail};
use crate::services::poster_display_name;
use crate::utils::validate::validate_entity_id;

pub async fn list_for_course(
    service: &QuestionService,
    course_id: i64,
    sort: &str,
) -> Result<Vec<QuestionDetail>> {
    validate_entity_id(course_id, "course").map_err(QAForumError::validation)?;

    let storage = service.storage();

    // 未知排序参数回退为 newest
    let sort = QuestionSort::from_query(sort);
    let questions = storage.list_questions_for_course(course_id, sort).await?;

    // 发帖人姓名一次批量查出，避免逐条回表
    let mut poster_ids: Vec<i64> = questions.iter().map(|q| q.poster_id).collect();
    poster_ids.sort_unstable();
    poster_ids.dedup();

    let posters: HashMap<i64, _> = storage
        .get_students_by_ids(&poster_ids)
        .await?
        .into_iter()
        .map(|s| (s.id, s))
        .collect();

    Ok(questions
        .into_iter()
        .map(|question| {
            let poster_name =
                poster_display_name(question.is_anonymous, posters.get(&question.poster_id));
            QuestionDetail {
                question,
                poster_name,
            }
        })
        .collect())
}
