use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use models::communication;
use service::services::communication_service::{self, CommunicationPayload};

use super::{auth::ServerState, ListQuery};
use crate::errors::{JsonApiError, JsonBody, PathParam, QueryParams};
use crate::openapi::{ErrorDoc, MessageDoc, MessageRequest};

/// List communications in id order, optionally one page at a time.
#[utoipa::path(get, path = "/communications", tag = "communications", params(ListQuery), responses((status = 200, description = "All rows, or one page", body = [MessageDoc]), (status = 400, description = "Bad paging parameters", body = ErrorDoc)))]
pub async fn list(
    State(state): State<ServerState>,
    QueryParams(q): QueryParams<ListQuery>,
) -> Result<Json<Vec<communication::Model>>, JsonApiError> {
    let rows = communication_service::list_communications(&state.db, q.pagination()).await?;
    Ok(Json(rows))
}

/// Fetch one communication by id.
#[utoipa::path(get, path = "/communications/{id}", tag = "communications", params(("id" = i32, Path, description = "Communication id")), responses((status = 200, description = "Found", body = MessageDoc), (status = 404, description = "Communication not found", body = ErrorDoc)))]
pub async fn get(State(state): State<ServerState>, PathParam(id): PathParam<i32>) -> Result<Json<communication::Model>, JsonApiError> {
    communication_service::get_communication(&state.db, id).await?.map(Json).ok_or_else(|| JsonApiError::not_found("Communication"))
}

/// Create a communication.
#[utoipa::path(post, path = "/communications", tag = "communications", request_body = MessageRequest, responses((status = 201, description = "Created", body = MessageDoc), (status = 400, description = "Missing field or invalid reference", body = ErrorDoc)))]
pub async fn create(
    State(state): State<ServerState>,
    JsonBody(input): JsonBody<CommunicationPayload>,
) -> Result<(StatusCode, Json<communication::Model>), JsonApiError> {
    let created = communication_service::create_communication(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace every field of a communication.
#[utoipa::path(put, path = "/communications/{id}", tag = "communications", params(("id" = i32, Path, description = "Communication id")), request_body = MessageRequest, responses((status = 200, description = "Replaced", body = MessageDoc), (status = 400, description = "Missing field or invalid reference", body = ErrorDoc), (status = 404, description = "Communication not found", body = ErrorDoc)))]
pub async fn update(
    State(state): State<ServerState>,
    PathParam(id): PathParam<i32>,
    JsonBody(input): JsonBody<CommunicationPayload>,
) -> Result<Json<communication::Model>, JsonApiError> {
    let updated = communication_service::update_communication(&state.db, id, input).await?;
    Ok(Json(updated))
}

/// Remove a communication.
#[utoipa::path(delete, path = "/communications/{id}", tag = "communications", params(("id" = i32, Path, description = "Communication id")), responses((status = 204, description = "Deleted"), (status = 404, description = "Communication not found", body = ErrorDoc)))]
pub async fn delete(State(state): State<ServerState>, PathParam(id): PathParam<i32>) -> Result<StatusCode, JsonApiError> {
    if communication_service::delete_communication(&state.db, id).await? {
        info!(communication_id = id, "deleted communication");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(JsonApiError::not_found("Communication"))
    }
}
