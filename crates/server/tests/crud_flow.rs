use axum::http::StatusCode;
use serde_json::json;

mod support;
use support::{build_app, create, delete, get, post, put};

#[tokio::test]
async fn test_full_booking_chain() -> anyhow::Result<()> {
    let app = build_app().await?;

    let user_id = create(
        &app,
        "/users",
        json!({"username": "alice", "email": "alice@example.com", "password": "password1", "role": "user"}),
    )
    .await?;
    let profile_id = create(
        &app,
        "/profiles",
        json!({"user_id": user_id, "first_name": "Alice", "last_name": "Smith", "phone_number": "555-1234"}),
    )
    .await?;
    let checklist_id = create(&app, "/checklists", json!({"user_id": user_id, "home_type": "one bedroom"})).await?;
    create(&app, "/inventories", json!({"checklist_id": checklist_id, "item_name": "Sofa", "status": "not_packed"})).await?;
    let company_id = create(
        &app,
        "/companies",
        json!({"name": "Fast Movers", "contact_email": "info@fastmovers.com", "contact_phone": "555-7890", "address": "123 Main St", "rating": 4.5}),
    )
    .await?;
    let move_id = create(
        &app,
        "/moves",
        json!({"user_id": user_id, "company_id": company_id, "current_address": "1 Old Rd", "new_address": "2 New Rd", "moving_date": "2024-07-15"}),
    )
    .await?;
    let quote_id = create(&app, "/quotes", json!({"move_id": move_id, "price": 1500.0})).await?;
    let booking_id = create(
        &app,
        "/bookings",
        json!({
            "quote_id": quote_id,
            "customer_id": user_id,
            "moving_company_id": company_id,
            "move_id": move_id,
            "move_date": "2024-07-15",
            "move_time": "09:30"
        }),
    )
    .await?;
    create(&app, "/notifications", json!({"booking_id": booking_id, "message": "Booking received"})).await?;
    create(
        &app,
        "/communications",
        json!({"booking_id": booking_id, "message": "See you at 9", "timestamp": "2024-07-01T10:00:00"}),
    )
    .await?;

    let resp = get(&app, &format!("/checklists/{}", checklist_id)).await?;
    assert_eq!(resp.body["home_type"], "One Bedroom");

    let resp = get(&app, &format!("/checklists/{}/items", checklist_id)).await?;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body[0]["item_name"], "Sofa");
    assert_eq!(resp.body[0]["status"], "Not Packed");

    let resp = get(&app, &format!("/quotes/{}", quote_id)).await?;
    assert_eq!(resp.body["status"], "pending");

    let resp = get(&app, &format!("/bookings/{}", booking_id)).await?;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["move_date"], "2024-07-15");
    assert_eq!(resp.body["move_time"], "09:30:00");
    assert_eq!(resp.body["confirmation_status"], "pending");

    let resp = put(
        &app,
        &format!("/profiles/{}", profile_id),
        json!({"user_id": user_id, "first_name": "Alicia", "last_name": "Smith", "phone_number": "555-1234"}),
    )
    .await?;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["first_name"], "Alicia");

    // A company with moves and bookings cannot be removed.
    let resp = delete(&app, &format!("/companies/{}", company_id)).await?;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);

    // Removing the user takes its profile, checklist, move and booking with it.
    assert_eq!(delete(&app, &format!("/users/{}", user_id)).await?.status, StatusCode::NO_CONTENT);
    assert_eq!(get(&app, &format!("/profiles/{}", profile_id)).await?.status, StatusCode::NOT_FOUND);
    assert_eq!(get(&app, &format!("/bookings/{}", booking_id)).await?.status, StatusCode::NOT_FOUND);
    assert_eq!(get(&app, "/notifications").await?.body, json!([]));
    assert_eq!(get(&app, "/communications").await?.body, json!([]));

    assert_eq!(delete(&app, &format!("/companies/{}", company_id)).await?.status, StatusCode::NO_CONTENT);
    Ok(())
}

#[tokio::test]
async fn test_validation_and_not_found_errors() -> anyhow::Result<()> {
    let app = build_app().await?;

    let resp = get(&app, "/profiles/999").await?;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(resp.body["error"], "Profile not found");

    let resp = delete(&app, "/moves/999").await?;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(resp.body["error"], "Move not found");

    let resp = post(
        &app,
        "/profiles",
        json!({"user_id": 42, "first_name": "Ghost", "last_name": "User", "phone_number": "000"}),
    )
    .await?;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.body["error"], "User 42 does not exist.");

    let user_id = create(
        &app,
        "/users",
        json!({"username": "bob", "email": "bob@example.com", "password": "password1", "role": "user"}),
    )
    .await?;

    let resp = post(&app, "/profiles", json!({"user_id": user_id, "first_name": "Bob", "last_name": "Jones"})).await?;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.body["error"], "Phone number must be provided.");

    let resp = post(&app, "/checklists", json!({"user_id": user_id, "home_type": "Castle"})).await?;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);

    let resp = post(&app, "/quotes", json!({"move_id": 1, "price": -5.0})).await?;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);

    let resp = put(&app, "/users/999", json!({"username": "x", "email": "x@example.com", "role": "user"})).await?;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn test_list_pagination() -> anyhow::Result<()> {
    let app = build_app().await?;
    for name in ["ann", "ben", "cat"] {
        create(
            &app,
            "/users",
            json!({"username": name, "email": format!("{}@example.com", name), "password": "pw", "role": "user"}),
        )
        .await?;
    }

    let all = get(&app, "/users").await?;
    assert_eq!(all.body.as_array().map(Vec::len), Some(3));

    let page = get(&app, "/users?page=2&per_page=2").await?;
    assert_eq!(page.status, StatusCode::OK);
    let rows = page.body.as_array().cloned().unwrap_or_default();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["username"], "cat");
    assert!(rows[0].get("password_hash").is_none());
    Ok(())
}

#[tokio::test]
async fn test_static_endpoints() -> anyhow::Result<()> {
    let app = build_app().await?;

    let resp = get(&app, "/health").await?;
    assert_eq!(resp.status, StatusCode::OK);

    let resp = get(&app, "/home_types").await?;
    assert_eq!(resp.body, json!([
        {"id": 1, "type": "Bedsitter"},
        {"id": 2, "type": "Studio"},
        {"id": 3, "type": "One Bedroom"},
        {"id": 4, "type": "Two Bedroom"}
    ]));

    let resp = get(&app, "/api-docs/openapi.json").await?;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body["paths"].get("/bookings").is_some());
    Ok(())
}

#[tokio::test]
async fn test_bad_path_and_query_are_json_errors() -> anyhow::Result<()> {
    let app = build_app().await?;

    let resp = get(&app, "/users/abc").await?;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert!(resp.body["error"].is_string(), "body was {}", resp.body);

    let resp = get(&app, "/users?page=abc").await?;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert!(resp.body["error"].is_string(), "body was {}", resp.body);

    let resp = get(&app, "/checklists/one/items").await?;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert!(resp.body["error"].is_string());
    Ok(())
}

#[tokio::test]
async fn test_full_record_put_rules() -> anyhow::Result<()> {
    let app = build_app().await?;
    let user_id = create(
        &app,
        "/users",
        json!({"username": "dana", "email": "dana@example.com", "password": "pw", "role": "user"}),
    )
    .await?;
    let profile_id = create(
        &app,
        "/profiles",
        json!({"user_id": user_id, "first_name": "Dana", "last_name": "Lee", "phone_number": "555-0000"}),
    )
    .await?;

    let resp = put(
        &app,
        &format!("/profiles/{}", profile_id),
        json!({"user_id": user_id, "first_name": "Dana", "last_name": "Lee"}),
    )
    .await?;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.body, json!({"error": "Phone number must be provided."}));

    let resp = put(
        &app,
        &format!("/profiles/{}", profile_id),
        json!({"user_id": 4242, "first_name": "Dana", "last_name": "Lee", "phone_number": "555-0000"}),
    )
    .await?;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.body["error"], "User 4242 does not exist.");

    // Rejected updates leave the row untouched.
    let resp = get(&app, &format!("/profiles/{}", profile_id)).await?;
    assert_eq!(resp.body["user_id"], user_id);
    assert_eq!(resp.body["phone_number"], "555-0000");
    Ok(())
}
