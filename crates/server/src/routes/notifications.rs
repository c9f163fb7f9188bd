use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use models::notification;
use service::services::notification_service::{self, NotificationPayload};

use super::{auth::ServerState, ListQuery};
use crate::errors::{JsonApiError, JsonBody, PathParam, QueryParams};
use crate::openapi::{ErrorDoc, MessageDoc, MessageRequest};

/// List notifications in id order, optionally one page at a time.
#[utoipa::path(get, path = "/notifications", tag = "notifications", params(ListQuery), responses((status = 200, description = "All rows, or one page", body = [MessageDoc]), (status = 400, description = "Bad paging parameters", body = ErrorDoc)))]
pub async fn list(
    State(state): State<ServerState>,
    QueryParams(q): QueryParams<ListQuery>,
) -> Result<Json<Vec<notification::Model>>, JsonApiError> {
    let rows = notification_service::list_notifications(&state.db, q.pagination()).await?;
    Ok(Json(rows))
}

/// Fetch one notification by id.
#[utoipa::path(get, path = "/notifications/{id}", tag = "notifications", params(("id" = i32, Path, description = "Notification id")), responses((status = 200, description = "Found", body = MessageDoc), (status = 404, description = "Notification not found", body = ErrorDoc)))]
pub async fn get(State(state): State<ServerState>, PathParam(id): PathParam<i32>) -> Result<Json<notification::Model>, JsonApiError> {
    notification_service::get_notification(&state.db, id).await?.map(Json).ok_or_else(|| JsonApiError::not_found("Notification"))
}

/// Create a notification.
#[utoipa::path(post, path = "/notifications", tag = "notifications", request_body = MessageRequest, responses((status = 201, description = "Created", body = MessageDoc), (status = 400, description = "Missing field or invalid reference", body = ErrorDoc)))]
pub async fn create(
    State(state): State<ServerState>,
    JsonBody(input): JsonBody<NotificationPayload>,
) -> Result<(StatusCode, Json<notification::Model>), JsonApiError> {
    let created = notification_service::create_notification(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace every field of a notification.
#[utoipa::path(put, path = "/notifications/{id}", tag = "notifications", params(("id" = i32, Path, description = "Notification id")), request_body = MessageRequest, responses((status = 200, description = "Replaced", body = MessageDoc), (status = 400, description = "Missing field or invalid reference", body = ErrorDoc), (status = 404, description = "Notification not found", body = ErrorDoc)))]
pub async fn update(
    State(state): State<ServerState>,
    PathParam(id): PathParam<i32>,
    JsonBody(input): JsonBody<NotificationPayload>,
) -> Result<Json<notification::Model>, JsonApiError> {
    let updated = notification_service::update_notification(&state.db, id, input).await?;
    Ok(Json(updated))
}

/// Remove a notification.
#[utoipa::path(delete, path = "/notifications/{id}", tag = "notifications", params(("id" = i32, Path, description = "Notification id")), responses((status = 204, description = "Deleted"), (status = 404, description = "Notification not found", body = ErrorDoc)))]
pub async fn delete(State(state): State<ServerState>, PathParam(id): PathParam<i32>) -> Result<StatusCode, JsonApiError> {
    if notification_service::delete_notification(&state.db, id).await? {
        info!(notification_id = id, "deleted notification");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(JsonApiError::not_found("Notification"))
    }
}
