use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use models::booking;
use service::services::booking_service::{self, BookingPayload};

use super::{auth::ServerState, ListQuery};
use crate::errors::{JsonApiError, JsonBody, PathParam, QueryParams};
use crate::openapi::{ErrorDoc, BookingDoc, BookingRequest};

/// List bookings in id order, optionally one page at a time.
#[utoipa::path(get, path = "/bookings", tag = "bookings", params(ListQuery), responses((status = 200, description = "All rows, or one page", body = [BookingDoc]), (status = 400, description = "Bad paging parameters", body = ErrorDoc)))]
pub async fn list(
    State(state): State<ServerState>,
    QueryParams(q): QueryParams<ListQuery>,
) -> Result<Json<Vec<booking::Model>>, JsonApiError> {
    let rows = booking_service::list_bookings(&state.db, q.pagination()).await?;
    Ok(Json(rows))
}

/// Fetch one booking by id.
#[utoipa::path(get, path = "/bookings/{id}", tag = "bookings", params(("id" = i32, Path, description = "Booking id")), responses((status = 200, description = "Found", body = BookingDoc), (status = 404, description = "Booking not found", body = ErrorDoc)))]
pub async fn get(State(state): State<ServerState>, PathParam(id): PathParam<i32>) -> Result<Json<booking::Model>, JsonApiError> {
    booking_service::get_booking(&state.db, id).await?.map(Json).ok_or_else(|| JsonApiError::not_found("Booking"))
}

/// Create a booking.
#[utoipa::path(post, path = "/bookings", tag = "bookings", request_body = BookingRequest, responses((status = 201, description = "Created", body = BookingDoc), (status = 400, description = "Missing field or invalid reference", body = ErrorDoc)))]
pub async fn create(
    State(state): State<ServerState>,
    JsonBody(input): JsonBody<BookingPayload>,
) -> Result<(StatusCode, Json<booking::Model>), JsonApiError> {
    let created = booking_service::create_booking(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace every field of a booking.
#[utoipa::path(put, path = "/bookings/{id}", tag = "bookings", params(("id" = i32, Path, description = "Booking id")), request_body = BookingRequest, responses((status = 200, description = "Replaced", body = BookingDoc), (status = 400, description = "Missing field or invalid reference", body = ErrorDoc), (status = 404, description = "Booking not found", body = ErrorDoc)))]
pub async fn update(
    State(state): State<ServerState>,
    PathParam(id): PathParam<i32>,
    JsonBody(input): JsonBody<BookingPayload>,
) -> Result<Json<booking::Model>, JsonApiError> {
    let updated = booking_service::update_booking(&state.db, id, input).await?;
    Ok(Json(updated))
}

/// Remove a booking with its notifications and communications.
#[utoipa::path(delete, path = "/bookings/{id}", tag = "bookings", params(("id" = i32, Path, description = "Booking id")), responses((status = 204, description = "Deleted"), (status = 404, description = "Booking not found", body = ErrorDoc)))]
pub async fn delete(State(state): State<ServerState>, PathParam(id): PathParam<i32>) -> Result<StatusCode, JsonApiError> {
    if booking_service::delete_booking(&state.db, id).await? {
        info!(booking_id = id, "deleted booking");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(JsonApiError::not_found("Booking"))
    }
}
