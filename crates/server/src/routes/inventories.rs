use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use models::inventory;
use service::services::inventory_service::{self, InventoryPayload};

use super::{auth::ServerState, ListQuery};
use crate::errors::{JsonApiError, JsonBody, PathParam, QueryParams};
use crate::openapi::{ErrorDoc, InventoryDoc, InventoryRequest};

/// List inventories in id order, optionally one page at a time.
#[utoipa::path(get, path = "/inventories", tag = "inventories", params(ListQuery), responses((status = 200, description = "All rows, or one page", body = [InventoryDoc]), (status = 400, description = "Bad paging parameters", body = ErrorDoc)))]
pub async fn list(
    State(state): State<ServerState>,
    QueryParams(q): QueryParams<ListQuery>,
) -> Result<Json<Vec<inventory::Model>>, JsonApiError> {
    let rows = inventory_service::list_items(&state.db, q.pagination()).await?;
    Ok(Json(rows))
}

/// Fetch one inventory item by id.
#[utoipa::path(get, path = "/inventories/{id}", tag = "inventories", params(("id" = i32, Path, description = "Inventory item id")), responses((status = 200, description = "Found", body = InventoryDoc), (status = 404, description = "Inventory item not found", body = ErrorDoc)))]
pub async fn get(State(state): State<ServerState>, PathParam(id): PathParam<i32>) -> Result<Json<inventory::Model>, JsonApiError> {
    inventory_service::get_item(&state.db, id).await?.map(Json).ok_or_else(|| JsonApiError::not_found("Inventory item"))
}

/// Create an inventory item.
#[utoipa::path(post, path = "/inventories", tag = "inventories", request_body = InventoryRequest, responses((status = 201, description = "Created", body = InventoryDoc), (status = 400, description = "Missing field or invalid reference", body = ErrorDoc)))]
pub async fn create(
    State(state): State<ServerState>,
    JsonBody(input): JsonBody<InventoryPayload>,
) -> Result<(StatusCode, Json<inventory::Model>), JsonApiError> {
    let created = inventory_service::create_item(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace every field of an inventory item.
#[utoipa::path(put, path = "/inventories/{id}", tag = "inventories", params(("id" = i32, Path, description = "Inventory item id")), request_body = InventoryRequest, responses((status = 200, description = "Replaced", body = InventoryDoc), (status = 400, description = "Missing field or invalid reference", body = ErrorDoc), (status = 404, description = "Inventory item not found", body = ErrorDoc)))]
pub async fn update(
    State(state): State<ServerState>,
    PathParam(id): PathParam<i32>,
    JsonBody(input): JsonBody<InventoryPayload>,
) -> Result<Json<inventory::Model>, JsonApiError> {
    let updated = inventory_service::update_item(&state.db, id, input).await?;
    Ok(Json(updated))
}

/// Remove an inventory item.
#[utoipa::path(delete, path = "/inventories/{id}", tag = "inventories", params(("id" = i32, Path, description = "Inventory item id")), responses((status = 204, description = "Deleted"), (status = 404, description = "Inventory item not found", body = ErrorDoc)))]
pub async fn delete(State(state): State<ServerState>, PathParam(id): PathParam<i32>) -> Result<StatusCode, JsonApiError> {
    if inventory_service::delete_item(&state.db, id).await? {
        info!(item_id = id, "deleted inventory item");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(JsonApiError::not_found("Inventory item"))
    }
}
