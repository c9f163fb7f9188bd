use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use models::checklist;
use service::services::checklist_service::{self, ChecklistPayload};

use super::{auth::ServerState, ListQuery};
use crate::errors::{JsonApiError, JsonBody, PathParam, QueryParams};
use crate::openapi::{ErrorDoc, ChecklistDoc, ChecklistRequest, InventoryDoc};

/// List checklists in id order, optionally one page at a time.
#[utoipa::path(get, path = "/checklists", tag = "checklists", params(ListQuery), responses((status = 200, description = "All rows, or one page", body = [ChecklistDoc]), (status = 400, description = "Bad paging parameters", body = ErrorDoc)))]
pub async fn list(
    State(state): State<ServerState>,
    QueryParams(q): QueryParams<ListQuery>,
) -> Result<Json<Vec<checklist::Model>>, JsonApiError> {
    let rows = checklist_service::list_checklists(&state.db, q.pagination()).await?;
    Ok(Json(rows))
}

/// Fetch one checklist by id.
#[utoipa::path(get, path = "/checklists/{id}", tag = "checklists", params(("id" = i32, Path, description = "Checklist id")), responses((status = 200, description = "Found", body = ChecklistDoc), (status = 404, description = "Checklist not found", body = ErrorDoc)))]
pub async fn get(State(state): State<ServerState>, PathParam(id): PathParam<i32>) -> Result<Json<checklist::Model>, JsonApiError> {
    checklist_service::get_checklist(&state.db, id).await?.map(Json).ok_or_else(|| JsonApiError::not_found("Checklist"))
}

/// Create a checklist.
#[utoipa::path(post, path = "/checklists", tag = "checklists", request_body = ChecklistRequest, responses((status = 201, description = "Created", body = ChecklistDoc), (status = 400, description = "Missing field or invalid reference", body = ErrorDoc)))]
pub async fn create(
    State(state): State<ServerState>,
    JsonBody(input): JsonBody<ChecklistPayload>,
) -> Result<(StatusCode, Json<checklist::Model>), JsonApiError> {
    let created = checklist_service::create_checklist(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace every field of a checklist.
#[utoipa::path(put, path = "/checklists/{id}", tag = "checklists", params(("id" = i32, Path, description = "Checklist id")), request_body = ChecklistRequest, responses((status = 200, description = "Replaced", body = ChecklistDoc), (status = 400, description = "Missing field or invalid reference", body = ErrorDoc), (status = 404, description = "Checklist not found", body = ErrorDoc)))]
pub async fn update(
    State(state): State<ServerState>,
    PathParam(id): PathParam<i32>,
    JsonBody(input): JsonBody<ChecklistPayload>,
) -> Result<Json<checklist::Model>, JsonApiError> {
    let updated = checklist_service::update_checklist(&state.db, id, input).await?;
    Ok(Json(updated))
}

/// Remove a checklist and its inventory items.
#[utoipa::path(delete, path = "/checklists/{id}", tag = "checklists", params(("id" = i32, Path, description = "Checklist id")), responses((status = 204, description = "Deleted"), (status = 404, description = "Checklist not found", body = ErrorDoc)))]
pub async fn delete(State(state): State<ServerState>, PathParam(id): PathParam<i32>) -> Result<StatusCode, JsonApiError> {
    if checklist_service::delete_checklist(&state.db, id).await? {
        info!(checklist_id = id, "deleted checklist");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(JsonApiError::not_found("Checklist"))
    }
}

/// Inventory items belonging to one checklist.
#[utoipa::path(get, path = "/checklists/{id}/items", tag = "checklists", params(("id" = i32, Path, description = "Checklist id")), responses((status = 200, description = "Items of the checklist", body = [InventoryDoc]), (status = 404, description = "Checklist not found", body = ErrorDoc)))]
pub async fn items(
    State(state): State<ServerState>,
    PathParam(id): PathParam<i32>,
) -> Result<Json<Vec<models::inventory::Model>>, JsonApiError> {
    let rows = checklist_service::list_checklist_items(&state.db, id).await?;
    Ok(Json(rows))
}
