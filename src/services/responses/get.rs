use super::ResponseService;
use crate::errors::{QAForumError, Result};
use crate::models::responses::responses::ResponseDetail;
use crate::services::poster_display_name;
use crate::utils::validate::validate_entity_id;

pub async fn get_response(service: &ResponseService, response_id: i64) -> Result<ResponseDetail> {
    validate_entity_id(response_id, "response").map_err(QAForumError::validation)?;

    let storage = service.storage();

    let response = storage
        .get_response_by_id(response_id)
        .await?
        .ok_or_else(|| QAForumError::not_found(format!("Response {response_id} not found")))?;

    let poster = storage.get_student_by_id(response.poster_id).await?;
    let poster_name = poster_display_name(response.is_anonymous, poster.as_ref());

    Ok(ResponseDetail {
        response,
        poster_name,
    })
}
