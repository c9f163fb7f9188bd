use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use models::moves;
use service::services::move_service::{self, MovePayload};

use super::{auth::ServerState, ListQuery};
use crate::errors::{JsonApiError, JsonBody, PathParam, QueryParams};
use crate::openapi::{ErrorDoc, MoveDoc, MoveRequest};

/// List moves in id order, optionally one page at a time.
#[utoipa::path(get, path = "/moves", tag = "moves", params(ListQuery), responses((status = 200, description = "All rows, or one page", body = [MoveDoc]), (status = 400, description = "Bad paging parameters", body = ErrorDoc)))]
pub async fn list(
    State(state): State<ServerState>,
    QueryParams(q): QueryParams<ListQuery>,
) -> Result<Json<Vec<moves::Model>>, JsonApiError> {
    let rows = move_service::list_moves(&state.db, q.pagination()).await?;
    Ok(Json(rows))
}

/// Fetch one move by id.
#[utoipa::path(get, path = "/moves/{id}", tag = "moves", params(("id" = i32, Path, description = "Move id")), responses((status = 200, description = "Found", body = MoveDoc), (status = 404, description = "Move not found", body = ErrorDoc)))]
pub async fn get(State(state): State<ServerState>, PathParam(id): PathParam<i32>) -> Result<Json<moves::Model>, JsonApiError> {
    move_service::get_move(&state.db, id).await?.map(Json).ok_or_else(|| JsonApiError::not_found("Move"))
}

/// Create a move.
#[utoipa::path(post, path = "/moves", tag = "moves", request_body = MoveRequest, responses((status = 201, description = "Created", body = MoveDoc), (status = 400, description = "Missing field or invalid reference", body = ErrorDoc)))]
pub async fn create(
    State(state): State<ServerState>,
    JsonBody(input): JsonBody<MovePayload>,
) -> Result<(StatusCode, Json<moves::Model>), JsonApiError> {
    let created = move_service::create_move(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace every field of a move.
#[utoipa::path(put, path = "/moves/{id}", tag = "moves", params(("id" = i32, Path, description = "Move id")), request_body = MoveRequest, responses((status = 200, description = "Replaced", body = MoveDoc), (status = 400, description = "Missing field or invalid reference", body = ErrorDoc), (status = 404, description = "Move not found", body = ErrorDoc)))]
pub async fn update(
    State(state): State<ServerState>,
    PathParam(id): PathParam<i32>,
    JsonBody(input): JsonBody<MovePayload>,
) -> Result<Json<moves::Model>, JsonApiError> {
    let updated = move_service::update_move(&state.db, id, input).await?;
    Ok(Json(updated))
}

/// Remove a move with its quotes and bookings.
#[utoipa::path(delete, path = "/moves/{id}", tag = "moves", params(("id" = i32, Path, description = "Move id")), responses((status = 204, description = "Deleted"), (status = 404, description = "Move not found", body = ErrorDoc)))]
pub async fn delete(State(state): State<ServerState>, PathParam(id): PathParam<i32>) -> Result<StatusCode, JsonApiError> {
    if move_service::delete_move(&state.db, id).await? {
        info!(move_id = id, "deleted move");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(JsonApiError::not_found("Move"))
    }
}
