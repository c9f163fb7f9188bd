use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use sea_orm::DatabaseConnection;
use serde_json::json;
use tracing::{error, info};

use models::user::EmailPolicy;
use service::auth::{
    domain::{AuthCompany, AuthUser, CompanySignupInput, LoginInput, SessionKind, SignupInput},
    errors::AuthError,
    repo::SeaOrmAuthRepository,
    service::{AuthConfig, AuthService},
};

use crate::errors::{JsonApiError, JsonBody};

pub const USER_COOKIE: &str = "auth_token";
pub const COMPANY_COOKIE: &str = "company_token";

#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub auth: AuthConfig,
}

impl ServerState {
    pub fn new(db: DatabaseConnection, auth: &configs::AuthConfig) -> Self {
        Self { db, auth: AuthConfig::from(auth) }
    }

    pub fn auth_service(&self) -> AuthService<SeaOrmAuthRepository> {
        let repo = Arc::new(SeaOrmAuthRepository::new(self.db.clone(), self.auth.email_policy.clone()));
        AuthService::new(repo, self.auth.clone())
    }

    pub fn email_policy(&self) -> &EmailPolicy { &self.auth.email_policy }
}

fn session_cookie(name: &'static str, token: String) -> Cookie<'static> {
    let mut cookie = Cookie::new(name, token);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_secure(false);
    cookie.set_same_site(SameSite::Lax);
    cookie
}

fn expired_cookie(name: &'static str) -> Cookie<'static> {
    let mut cookie = Cookie::from(name);
    cookie.set_path("/");
    cookie
}

fn issue(state: &ServerState, jar: CookieJar, kind: SessionKind, id: i32) -> Result<CookieJar, JsonApiError> {
    let token = state.auth_service().issue_token(kind, id)?;
    let name = match kind {
        SessionKind::User => USER_COOKIE,
        SessionKind::Company => COMPANY_COOKIE,
    };
    Ok(jar.add(session_cookie(name, token)))
}

/// The signed-in user, or `None` when the cookie is missing, invalid, expired or points at a deleted row.
pub async fn session_user(state: &ServerState, jar: &CookieJar) -> Result<Option<AuthUser>, JsonApiError> {
    let Some(cookie) = jar.get(USER_COOKIE) else { return Ok(None) };
    match state.auth_service().current_user(cookie.value()).await {
        Ok(user) => Ok(Some(user)),
        Err(AuthError::Unauthorized | AuthError::TokenError(_)) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub async fn session_company(state: &ServerState, jar: &CookieJar) -> Result<Option<AuthCompany>, JsonApiError> {
    let Some(cookie) = jar.get(COMPANY_COOKIE) else { return Ok(None) };
    match state.auth_service().current_company(cookie.value()).await {
        Ok(company) => Ok(Some(company)),
        Err(AuthError::Unauthorized | AuthError::TokenError(_)) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

#[utoipa::path(post, path = "/signup", tag = "auth", request_body = crate::openapi::SignupRequest, responses((status = 201, description = "Signed up; session cookie set", body = crate::openapi::UserDoc), (status = 400, description = "Missing field or duplicate username/email", body = crate::openapi::ErrorDoc)))]
pub async fn signup(
    State(state): State<ServerState>,
    jar: CookieJar,
    JsonBody(input): JsonBody<SignupInput>,
) -> Result<(StatusCode, CookieJar, Json<AuthUser>), JsonApiError> {
    let user = state.auth_service().signup(input).await.map_err(|e| {
        if matches!(e, AuthError::HashError(_) | AuthError::Repository(_)) {
            error!(err = %e, "signup failed");
        }
        JsonApiError::from(e)
    })?;
    let jar = issue(&state, jar, SessionKind::User, user.id)?;
    Ok((StatusCode::CREATED, jar, Json(user)))
}

#[utoipa::path(post, path = "/login", tag = "auth", request_body = crate::openapi::LoginRequest, responses((status = 200, description = "Logged in; session cookie set", body = crate::openapi::UserDoc), (status = 401, description = "Invalid credentials", body = crate::openapi::ErrorDoc)))]
pub async fn login(
    State(state): State<ServerState>,
    jar: CookieJar,
    JsonBody(input): JsonBody<LoginInput>,
) -> Result<(CookieJar, Json<AuthUser>), JsonApiError> {
    let user = state.auth_service().login(input).await?;
    let jar = issue(&state, jar, SessionKind::User, user.id)?;
    Ok((jar, Json(user)))
}

#[utoipa::path(delete, path = "/logout", tag = "auth", responses((status = 204, description = "Session cookie cleared")))]
pub async fn logout(jar: CookieJar) -> (CookieJar, StatusCode) {
    (jar.remove(expired_cookie(USER_COOKIE)), StatusCode::NO_CONTENT)
}

#[utoipa::path(get, path = "/check_session", tag = "auth", responses((status = 200, description = "Signed-in user", body = crate::openapi::UserDoc), (status = 204, description = "No session")))]
pub async fn check_session(State(state): State<ServerState>, jar: CookieJar) -> Result<Response, JsonApiError> {
    Ok(match session_user(&state, &jar).await? {
        Some(user) => Json(user).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}

#[utoipa::path(post, path = "/company_signup", tag = "auth", request_body = crate::openapi::CompanySignupRequest, responses((status = 201, description = "Company registered", body = crate::openapi::CompanyDoc), (status = 400, description = "Missing field or duplicate email", body = crate::openapi::ErrorDoc)))]
pub async fn company_signup(
    State(state): State<ServerState>,
    jar: CookieJar,
    JsonBody(input): JsonBody<CompanySignupInput>,
) -> Result<(StatusCode, CookieJar, Json<AuthCompany>), JsonApiError> {
    let company = state.auth_service().company_signup(input).await?;
    let jar = issue(&state, jar, SessionKind::Company, company.id)?;
    Ok((StatusCode::CREATED, jar, Json(company)))
}

#[utoipa::path(post, path = "/company_login", tag = "auth", request_body = crate::openapi::LoginRequest, responses((status = 200, description = "Logged in; company cookie set", body = crate::openapi::CompanyDoc), (status = 401, description = "Invalid credentials", body = crate::openapi::ErrorDoc)))]
pub async fn company_login(
    State(state): State<ServerState>,
    jar: CookieJar,
    JsonBody(input): JsonBody<LoginInput>,
) -> Result<(CookieJar, Json<AuthCompany>), JsonApiError> {
    let company = state.auth_service().company_login(input).await?;
    let jar = issue(&state, jar, SessionKind::Company, company.id)?;
    Ok((jar, Json(company)))
}

#[utoipa::path(delete, path = "/company_logout", tag = "auth", responses((status = 204, description = "Company cookie cleared")))]
pub async fn company_logout(jar: CookieJar) -> (CookieJar, StatusCode) {
    (jar.remove(expired_cookie(COMPANY_COOKIE)), StatusCode::NO_CONTENT)
}

#[utoipa::path(get, path = "/company_check_session", tag = "auth", responses((status = 200, description = "Signed-in company", body = crate::openapi::CompanyDoc), (status = 204, description = "No session")))]
pub async fn company_check_session(State(state): State<ServerState>, jar: CookieJar) -> Result<Response, JsonApiError> {
    Ok(match session_company(&state, &jar).await? {
        Some(company) => Json(company).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}

/// The signed-in user's dashboard.
#[utoipa::path(get, path = "/user_dashboard", tag = "auth", responses((status = 200, description = "Dashboard for the session user", body = crate::openapi::UserDashboardDoc), (status = 401, description = "No user session", body = crate::openapi::ErrorDoc)))]
pub async fn user_dashboard(
    State(state): State<ServerState>,
    jar: CookieJar,
) -> Result<Json<serde_json::Value>, JsonApiError> {
    let user = session_user(&state, &jar).await?.ok_or_else(|| JsonApiError::unauthorized("Unauthorized"))?;
    info!(user_id = user.id, "user_dashboard");
    Ok(Json(json!({
        "message": "Welcome to User Dashboard",
        "user": user,
    })))
}

/// The signed-in company's dashboard.
#[utoipa::path(get, path = "/company_dashboard", tag = "auth", responses((status = 200, description = "Dashboard for the session company", body = crate::openapi::CompanyDashboardDoc), (status = 401, description = "No company session", body = crate::openapi::ErrorDoc)))]
pub async fn company_dashboard(
    State(state): State<ServerState>,
    jar: CookieJar,
) -> Result<Json<serde_json::Value>, JsonApiError> {
    let company = session_company(&state, &jar).await?.ok_or_else(|| JsonApiError::unauthorized("Unauthorized"))?;
    info!(company_id = company.id, "company_dashboard");
    Ok(Json(json!({
        "message": "Welcome to Company Dashboard",
        "company": company,
    })))
}
