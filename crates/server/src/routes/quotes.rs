use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use models::quote;
use service::services::quote_service::{self, QuotePayload};

use super::{auth::ServerState, ListQuery};
use crate::errors::{JsonApiError, JsonBody, PathParam, QueryParams};
use crate::openapi::{ErrorDoc, QuoteDoc, QuoteRequest};

/// List quotes in id order, optionally one page at a time.
#[utoipa::path(get, path = "/quotes", tag = "quotes", params(ListQuery), responses((status = 200, description = "All rows, or one page", body = [QuoteDoc]), (status = 400, description = "Bad paging parameters", body = ErrorDoc)))]
pub async fn list(
    State(state): State<ServerState>,
    QueryParams(q): QueryParams<ListQuery>,
) -> Result<Json<Vec<quote::Model>>, JsonApiError> {
    let rows = quote_service::list_quotes(&state.db, q.pagination()).await?;
    Ok(Json(rows))
}

/// Fetch one quote by id.
#[utoipa::path(get, path = "/quotes/{id}", tag = "quotes", params(("id" = i32, Path, description = "Quote id")), responses((status = 200, description = "Found", body = QuoteDoc), (status = 404, description = "Quote not found", body = ErrorDoc)))]
pub async fn get(State(state): State<ServerState>, PathParam(id): PathParam<i32>) -> Result<Json<quote::Model>, JsonApiError> {
    quote_service::get_quote(&state.db, id).await?.map(Json).ok_or_else(|| JsonApiError::not_found("Quote"))
}

/// Create a quote.
#[utoipa::path(post, path = "/quotes", tag = "quotes", request_body = QuoteRequest, responses((status = 201, description = "Created", body = QuoteDoc), (status = 400, description = "Missing field or invalid reference", body = ErrorDoc)))]
pub async fn create(
    State(state): State<ServerState>,
    JsonBody(input): JsonBody<QuotePayload>,
) -> Result<(StatusCode, Json<quote::Model>), JsonApiError> {
    let created = quote_service::create_quote(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace every field of a quote.
#[utoipa::path(put, path = "/quotes/{id}", tag = "quotes", params(("id" = i32, Path, description = "Quote id")), request_body = QuoteRequest, responses((status = 200, description = "Replaced", body = QuoteDoc), (status = 400, description = "Missing field or invalid reference", body = ErrorDoc), (status = 404, description = "Quote not found", body = ErrorDoc)))]
pub async fn update(
    State(state): State<ServerState>,
    PathParam(id): PathParam<i32>,
    JsonBody(input): JsonBody<QuotePayload>,
) -> Result<Json<quote::Model>, JsonApiError> {
    let updated = quote_service::update_quote(&state.db, id, input).await?;
    Ok(Json(updated))
}

/// Remove a quote and the bookings made from it.
#[utoipa::path(delete, path = "/quotes/{id}", tag = "quotes", params(("id" = i32, Path, description = "Quote id")), responses((status = 204, description = "Deleted"), (status = 404, description = "Quote not found", body = ErrorDoc)))]
pub async fn delete(State(state): State<ServerState>, PathParam(id): PathParam<i32>) -> Result<StatusCode, JsonApiError> {
    if quote_service::delete_quote(&state.db, id).await? {
        info!(quote_id = id, "deleted quote");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(JsonApiError::not_found("Quote"))
    }
}
