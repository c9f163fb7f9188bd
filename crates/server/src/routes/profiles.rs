use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use models::profile;
use service::services::profile_service::{self, ProfilePayload};

use super::{auth::ServerState, ListQuery};
use crate::errors::{JsonApiError, JsonBody, PathParam, QueryParams};
use crate::openapi::{ErrorDoc, ProfileDoc, ProfileRequest};

/// List profiles in id order, optionally one page at a time.
#[utoipa::path(get, path = "/profiles", tag = "profiles", params(ListQuery), responses((status = 200, description = "All rows, or one page", body = [ProfileDoc]), (status = 400, description = "Bad paging parameters", body = ErrorDoc)))]
pub async fn list(
    State(state): State<ServerState>,
    QueryParams(q): QueryParams<ListQuery>,
) -> Result<Json<Vec<profile::Model>>, JsonApiError> {
    let rows = profile_service::list_profiles(&state.db, q.pagination()).await?;
    Ok(Json(rows))
}

/// Fetch one profile by id.
#[utoipa::path(get, path = "/profiles/{id}", tag = "profiles", params(("id" = i32, Path, description = "Profile id")), responses((status = 200, description = "Found", body = ProfileDoc), (status = 404, description = "Profile not found", body = ErrorDoc)))]
pub async fn get(State(state): State<ServerState>, PathParam(id): PathParam<i32>) -> Result<Json<profile::Model>, JsonApiError> {
    profile_service::get_profile(&state.db, id).await?.map(Json).ok_or_else(|| JsonApiError::not_found("Profile"))
}

/// Create a profile.
#[utoipa::path(post, path = "/profiles", tag = "profiles", request_body = ProfileRequest, responses((status = 201, description = "Created", body = ProfileDoc), (status = 400, description = "Missing field or invalid reference", body = ErrorDoc)))]
pub async fn create(
    State(state): State<ServerState>,
    JsonBody(input): JsonBody<ProfilePayload>,
) -> Result<(StatusCode, Json<profile::Model>), JsonApiError> {
    let created = profile_service::create_profile(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace every field of a profile.
#[utoipa::path(put, path = "/profiles/{id}", tag = "profiles", params(("id" = i32, Path, description = "Profile id")), request_body = ProfileRequest, responses((status = 200, description = "Replaced", body = ProfileDoc), (status = 400, description = "Missing field or invalid reference", body = ErrorDoc), (status = 404, description = "Profile not found", body = ErrorDoc)))]
pub async fn update(
    State(state): State<ServerState>,
    PathParam(id): PathParam<i32>,
    JsonBody(input): JsonBody<ProfilePayload>,
) -> Result<Json<profile::Model>, JsonApiError> {
    let updated = profile_service::update_profile(&state.db, id, input).await?;
    Ok(Json(updated))
}

/// Remove a profile.
#[utoipa::path(delete, path = "/profiles/{id}", tag = "profiles", params(("id" = i32, Path, description = "Profile id")), responses((status = 204, description = "Deleted"), (status = 404, description = "Profile not found", body = ErrorDoc)))]
pub async fn delete(State(state): State<ServerState>, PathParam(id): PathParam<i32>) -> Result<StatusCode, JsonApiError> {
    if profile_service::delete_profile(&state.db, id).await? {
        info!(profile_id = id, "deleted profile");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(JsonApiError::not_found("Profile"))
    }
}
