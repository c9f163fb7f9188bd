use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use models::moving_company;
use service::services::company_service::{self, CompanyPayload};

use super::{auth::ServerState, ListQuery};
use crate::errors::{JsonApiError, JsonBody, PathParam, QueryParams};
use crate::openapi::{ErrorDoc, CompanyDoc, CompanyRequest};

/// List companies in id order, optionally one page at a time.
#[utoipa::path(get, path = "/companies", tag = "companies", params(ListQuery), responses((status = 200, description = "All rows, or one page", body = [CompanyDoc]), (status = 400, description = "Bad paging parameters", body = ErrorDoc)))]
pub async fn list(
    State(state): State<ServerState>,
    QueryParams(q): QueryParams<ListQuery>,
) -> Result<Json<Vec<moving_company::Model>>, JsonApiError> {
    let rows = company_service::list_companies(&state.db, q.pagination()).await?;
    Ok(Json(rows))
}

/// Fetch one company by id.
#[utoipa::path(get, path = "/companies/{id}", tag = "companies", params(("id" = i32, Path, description = "Company id")), responses((status = 200, description = "Found", body = CompanyDoc), (status = 404, description = "Company not found", body = ErrorDoc)))]
pub async fn get(State(state): State<ServerState>, PathParam(id): PathParam<i32>) -> Result<Json<moving_company::Model>, JsonApiError> {
    company_service::get_company(&state.db, id).await?.map(Json).ok_or_else(|| JsonApiError::not_found("Company"))
}

/// Create a company.
#[utoipa::path(post, path = "/companies", tag = "companies", request_body = CompanyRequest, responses((status = 201, description = "Created", body = CompanyDoc), (status = 400, description = "Missing field or invalid reference", body = ErrorDoc)))]
pub async fn create(
    State(state): State<ServerState>,
    JsonBody(input): JsonBody<CompanyPayload>,
) -> Result<(StatusCode, Json<moving_company::Model>), JsonApiError> {
    let created = company_service::create_company(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace every field of a company.
#[utoipa::path(put, path = "/companies/{id}", tag = "companies", params(("id" = i32, Path, description = "Company id")), request_body = CompanyRequest, responses((status = 200, description = "Replaced", body = CompanyDoc), (status = 400, description = "Missing field or invalid reference", body = ErrorDoc), (status = 404, description = "Company not found", body = ErrorDoc)))]
pub async fn update(
    State(state): State<ServerState>,
    PathParam(id): PathParam<i32>,
    JsonBody(input): JsonBody<CompanyPayload>,
) -> Result<Json<moving_company::Model>, JsonApiError> {
    let updated = company_service::update_company(&state.db, id, input).await?;
    Ok(Json(updated))
}

/// Remove a company that no move or booking references.
#[utoipa::path(delete, path = "/companies/{id}", tag = "companies", params(("id" = i32, Path, description = "Company id")), responses((status = 204, description = "Deleted"), (status = 400, description = "Still referenced by moves or bookings", body = ErrorDoc), (status = 404, description = "Company not found", body = ErrorDoc)))]
pub async fn delete(State(state): State<ServerState>, PathParam(id): PathParam<i32>) -> Result<StatusCode, JsonApiError> {
    if company_service::delete_company(&state.db, id).await? {
        info!(company_id = id, "deleted company");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(JsonApiError::not_found("Company"))
    }
}
