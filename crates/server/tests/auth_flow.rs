use axum::http::{Method, StatusCode};
use serde_json::json;

mod support;
use support::{build_app, post, send};

#[tokio::test]
async fn test_signup_login_session_logout() -> anyhow::Result<()> {
    let app = build_app().await?;

    let resp = post(
        &app,
        "/signup",
        json!({"username": "alice", "email": "alice@example.com", "password": "password1", "role": "user"}),
    )
    .await?;
    assert_eq!(resp.status, StatusCode::CREATED);
    assert_eq!(resp.body["username"], "alice");
    assert!(resp.body.get("password_hash").is_none());
    let cookie = resp.cookie("auth_token").expect("signup sets a session cookie");

    let resp = send(&app, Method::GET, "/check_session", None, Some(&cookie)).await?;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["email"], "alice@example.com");

    let resp = post(&app, "/login", json!({"email": "alice@example.com", "password": "wrong"})).await?;
    assert_eq!(resp.status, StatusCode::UNAUTHORIZED);
    assert_eq!(resp.body["error"], "Invalid credentials");

    let resp = post(&app, "/login", json!({"email": "alice@example.com", "password": "password1"})).await?;
    assert_eq!(resp.status, StatusCode::OK);
    let cookie = resp.cookie("auth_token").expect("login sets a session cookie");

    let resp = send(&app, Method::GET, "/user_dashboard", None, Some(&cookie)).await?;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["message"], "Welcome to User Dashboard");
    assert_eq!(resp.body["user"]["username"], "alice");

    let resp = send(&app, Method::DELETE, "/logout", None, Some(&cookie)).await?;
    assert_eq!(resp.status, StatusCode::NO_CONTENT);
    assert_eq!(resp.cookie("auth_token").as_deref(), Some("auth_token="));

    let resp = send(&app, Method::GET, "/check_session", None, None).await?;
    assert_eq!(resp.status, StatusCode::NO_CONTENT);
    Ok(())
}

#[tokio::test]
async fn test_signup_validation_messages() -> anyhow::Result<()> {
    let app = build_app().await?;

    let resp = post(&app, "/signup", json!({"username": "alice", "email": "alice@example.com"})).await?;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.body["error"], "Missing required fields");

    let alice = json!({"username": "alice", "email": "alice@example.com", "password": "password1", "role": "user"});
    assert_eq!(post(&app, "/signup", alice).await?.status, StatusCode::CREATED);

    let resp = post(
        &app,
        "/signup",
        json!({"username": "alice", "email": "alice2@example.com", "password": "password1", "role": "user"}),
    )
    .await?;
    assert_eq!(resp.body["error"], "Username already exists");

    let resp = post(
        &app,
        "/signup",
        json!({"username": "alice2", "email": "alice@example.com", "password": "password1", "role": "user"}),
    )
    .await?;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.body["error"], "Email already exists");

    let resp = post(
        &app,
        "/signup",
        json!({"username": "mallory", "email": "mallory@gmail.com", "password": "password1", "role": "user"}),
    )
    .await?;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.body["error"], "User email must end with '@example.com'.");
    Ok(())
}

#[tokio::test]
async fn test_company_session_flow() -> anyhow::Result<()> {
    let app = build_app().await?;

    let resp = post(
        &app,
        "/company_signup",
        json!({
            "name": "Fast Movers",
            "email": "info@fastmovers.com",
            "phone_number": "555-7890",
            "address": "123 Main St",
            "password": "moveit"
        }),
    )
    .await?;
    assert_eq!(resp.status, StatusCode::CREATED);
    assert_eq!(resp.body["contact_email"], "info@fastmovers.com");

    let resp = post(&app, "/company_login", json!({"email": "info@fastmovers.com", "password": "nope"})).await?;
    assert_eq!(resp.status, StatusCode::UNAUTHORIZED);

    let resp = post(&app, "/company_login", json!({"email": "info@fastmovers.com", "password": "moveit"})).await?;
    assert_eq!(resp.status, StatusCode::OK);
    let cookie = resp.cookie("company_token").expect("company login sets a cookie");

    let resp = send(&app, Method::GET, "/company_check_session", None, Some(&cookie)).await?;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["name"], "Fast Movers");

    let resp = send(&app, Method::GET, "/company_dashboard", None, Some(&cookie)).await?;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["message"], "Welcome to Company Dashboard");
    assert_eq!(resp.body["company"]["name"], "Fast Movers");

    // A company cookie is not a user session.
    let resp = send(&app, Method::GET, "/user_dashboard", None, Some(&cookie)).await?;
    assert_eq!(resp.status, StatusCode::UNAUTHORIZED);

    let resp = send(&app, Method::DELETE, "/company_logout", None, Some(&cookie)).await?;
    assert_eq!(resp.status, StatusCode::NO_CONTENT);
    Ok(())
}

#[tokio::test]
async fn test_tampered_cookie_is_no_session() -> anyhow::Result<()> {
    let app = build_app().await?;
    let resp = send(&app, Method::GET, "/check_session", None, Some("auth_token=not.a.jwt")).await?;
    assert_eq!(resp.status, StatusCode::NO_CONTENT);
    let resp = send(&app, Method::GET, "/user_dashboard", None, Some("auth_token=not.a.jwt")).await?;
    assert_eq!(resp.status, StatusCode::UNAUTHORIZED);
    assert_eq!(resp.body["error"], "Unauthorized");
    Ok(())
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() -> anyhow::Result<()> {
    let app = build_app().await?;
    let req = axum::http::Request::builder()
        .method("POST")
        .uri("/login")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))?;
    let resp = tower::ServiceExt::oneshot(app.clone(), req).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    Ok(())
}
