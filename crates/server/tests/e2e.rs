use std::net::SocketAddr;

use serde_json::{json, Value};

mod support;

async fn spawn_server() -> anyhow::Result<SocketAddr> {
    let app = support::build_app().await?;
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(addr)
}

#[tokio::test]
async fn test_session_cookie_over_real_socket() -> anyhow::Result<()> {
    let addr = spawn_server().await?;
    let base = format!("http://{}", addr);
    let client = reqwest::Client::builder().cookie_store(true).build()?;

    let resp = client.get(format!("{}/health", base)).send().await?;
    assert_eq!(resp.status(), 200);

    let resp = client
        .post(format!("{}/signup", base))
        .json(&json!({"username": "carol", "email": "carol@example.com", "password": "hunter22", "role": "user"}))
        .send()
        .await?;
    assert_eq!(resp.status(), 201);

    let resp = client.get(format!("{}/check_session", base)).send().await?;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await?;
    assert_eq!(body["username"], "carol");

    let resp = client.delete(format!("{}/logout", base)).send().await?;
    assert_eq!(resp.status(), 204);

    let resp = client.get(format!("{}/check_session", base)).send().await?;
    assert_eq!(resp.status(), 204);
    Ok(())
}

#[tokio::test]
async fn test_cors_preflight_is_answered() -> anyhow::Result<()> {
    let addr = spawn_server().await?;
    let resp = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, format!("http://{}/moves", addr))
        .header("Origin", "http://localhost:3000")
        .header("Access-Control-Request-Method", "POST")
        .send()
        .await?;
    assert!(resp.status().is_success());
    assert!(resp.headers().contains_key("access-control-allow-origin"));
    Ok(())
}
