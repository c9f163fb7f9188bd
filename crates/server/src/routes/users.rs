use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use models::user;
use service::auth::domain::{AuthUser, SignupInput};
use service::services::user_service::{self, UserPayload};

use super::{auth::ServerState, ListQuery};
use crate::errors::{JsonApiError, JsonBody, PathParam, QueryParams};
use crate::openapi::{ErrorDoc, SignupRequest, UserDoc, UserRequest};

/// List users in id order, optionally one page at a time.
#[utoipa::path(get, path = "/users", tag = "users", params(ListQuery), responses((status = 200, description = "All rows, or one page", body = [UserDoc]), (status = 400, description = "Bad paging parameters", body = ErrorDoc)))]
pub async fn list(
    State(state): State<ServerState>,
    QueryParams(q): QueryParams<ListQuery>,
) -> Result<Json<Vec<user::Model>>, JsonApiError> {
    let rows = user_service::list_users(&state.db, q.pagination()).await?;
    Ok(Json(rows))
}

/// Fetch one user by id.
#[utoipa::path(get, path = "/users/{id}", tag = "users", params(("id" = i32, Path, description = "User id")), responses((status = 200, description = "Found", body = UserDoc), (status = 404, description = "User not found", body = ErrorDoc)))]
pub async fn get(State(state): State<ServerState>, PathParam(id): PathParam<i32>) -> Result<Json<user::Model>, JsonApiError> {
    user_service::get_user(&state.db, id).await?.map(Json).ok_or_else(|| JsonApiError::not_found("User"))
}

/// Same rules and messages as `/signup`, without starting a session.
#[utoipa::path(post, path = "/users", tag = "users", request_body = SignupRequest, responses((status = 201, description = "Created", body = UserDoc), (status = 400, description = "Missing field or duplicate username/email", body = ErrorDoc)))]
pub async fn create(
    State(state): State<ServerState>,
    JsonBody(input): JsonBody<SignupInput>,
) -> Result<(StatusCode, Json<AuthUser>), JsonApiError> {
    let user = state.auth_service().signup(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Replace a user's fields; an omitted password keeps the stored hash.
#[utoipa::path(put, path = "/users/{id}", tag = "users", params(("id" = i32, Path, description = "User id")), request_body = UserRequest, responses((status = 200, description = "Replaced", body = UserDoc), (status = 400, description = "Missing field or duplicate username/email", body = ErrorDoc), (status = 404, description = "User not found", body = ErrorDoc)))]
pub async fn update(
    State(state): State<ServerState>,
    PathParam(id): PathParam<i32>,
    JsonBody(input): JsonBody<UserPayload>,
) -> Result<Json<user::Model>, JsonApiError> {
    let updated = user_service::update_user(&state.db, id, input, state.email_policy()).await?;
    Ok(Json(updated))
}

/// Remove a user and everything they own.
#[utoipa::path(delete, path = "/users/{id}", tag = "users", params(("id" = i32, Path, description = "User id")), responses((status = 204, description = "Deleted"), (status = 404, description = "User not found", body = ErrorDoc)))]
pub async fn delete(State(state): State<ServerState>, PathParam(id): PathParam<i32>) -> Result<StatusCode, JsonApiError> {
    if user_service::delete_user(&state.db, id).await? {
        info!(user_id = id, "deleted user");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(JsonApiError::not_found("User"))
    }
}
