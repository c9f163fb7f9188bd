use axum::{routing::get, Json, Router};
use serde::Deserialize;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::{IntoParams, OpenApi};

use common::types::Health;
use service::pagination::Pagination;
use service::services::checklist_service::{self, HomeTypeEntry};

use crate::openapi::ApiDoc;

pub mod auth;
pub mod bookings;
pub mod checklists;
pub mod communications;
pub mod companies;
pub mod inventories;
pub mod moves;
pub mod notifications;
pub mod profiles;
pub mod quotes;
pub mod users;

use auth::ServerState;

/// `?page=&per_page=`; without either the whole table is returned.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// 1-based page number
    pub page: Option<u32>,
    /// Rows per page, clamped to 1..=100
    pub per_page: Option<u32>,
}

impl ListQuery {
    pub fn pagination(&self) -> Option<Pagination> { Pagination::from_query(self.page, self.per_page) }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

#[utoipa::path(get, path = "/home_types", tag = "checklists", responses((status = 200, description = "Supported home types", body = [crate::openapi::HomeTypeDoc])))]
pub async fn home_types() -> Json<Vec<HomeTypeEntry>> {
    Json(checklist_service::home_types())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: auth, dashboards and one CRUD block per resource.
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/home_types", get(home_types))
        .route("/api-docs/openapi.json", get(openapi_json));

    let sessions = Router::new()
        .route("/signup", axum::routing::post(auth::signup))
        .route("/login", axum::routing::post(auth::login))
        .route("/logout", axum::routing::delete(auth::logout))
        .route("/check_session", get(auth::check_session))
        .route("/company_signup", axum::routing::post(auth::company_signup))
        .route("/company_login", axum::routing::post(auth::company_login))
        .route("/company_logout", axum::routing::delete(auth::company_logout))
        .route("/company_check_session", get(auth::company_check_session))
        .route("/user_dashboard", get(auth::user_dashboard))
        .route("/company_dashboard", get(auth::company_dashboard));

    let resources = Router::new()
        .route("/users", get(users::list).post(users::create))
        .route("/users/:id", get(users::get).put(users::update).delete(users::delete))
        .route("/profiles", get(profiles::list).post(profiles::create))
        .route("/profiles/:id", get(profiles::get).put(profiles::update).delete(profiles::delete))
        .route("/checklists", get(checklists::list).post(checklists::create))
        .route("/checklists/:id", get(checklists::get).put(checklists::update).delete(checklists::delete))
        .route("/checklists/:id/items", get(checklists::items))
        .route("/inventories", get(inventories::list).post(inventories::create))
        .route("/inventories/:id", get(inventories::get).put(inventories::update).delete(inventories::delete))
        .route("/companies", get(companies::list).post(companies::create))
        .route("/companies/:id", get(companies::get).put(companies::update).delete(companies::delete))
        .route("/moves", get(moves::list).post(moves::create))
        .route("/moves/:id", get(moves::get).put(moves::update).delete(moves::delete))
        .route("/quotes", get(quotes::list).post(quotes::create))
        .route("/quotes/:id", get(quotes::get).put(quotes::update).delete(quotes::delete))
        .route("/bookings", get(bookings::list).post(bookings::create))
        .route("/bookings/:id", get(bookings::get).put(bookings::update).delete(bookings::delete))
        .route("/notifications", get(notifications::list).post(notifications::create))
        .route(
            "/notifications/:id",
            get(notifications::get).put(notifications::update).delete(notifications::delete),
        )
        .route("/communications", get(communications::list).post(communications::create))
        .route(
            "/communications/:id",
            get(communications::get).put(communications::update).delete(communications::delete),
        );

    public
        .merge(sessions)
        .merge(resources)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
