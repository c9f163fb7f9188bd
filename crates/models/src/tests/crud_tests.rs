use anyhow::Result;
use chrono::Utc;
use sea_orm::EntityTrait;

use super::{make_chain, make_user, policy, setup_test_db};
use crate::errors::ModelError;
use crate::{checklist, inventory, notification, profile, quote, user};

#[tokio::test]
async fn test_user_create_and_read() -> Result<()> {
    let db = setup_test_db().await?;
    let created = make_user(&db, "ann").await?;
    let found = user::find(&db, created.id).await?;
    assert_eq!(found.username, "ann");
    assert_eq!(found.email, "ann@example.com");
    assert_eq!(found.role, "user");

    let json = serde_json::to_value(&found)?;
    assert!(json.get("password_hash").is_none());
    Ok(())
}

#[tokio::test]
async fn test_user_uniqueness_on_create_and_update() -> Result<()> {
    let db = setup_test_db().await?;
    let ann = make_user(&db, "ann").await?;
    let bob = make_user(&db, "bob").await?;

    let dup = user::NewUser {
        username: "ann".into(),
        email: "other@example.com".into(),
        password_hash: "h".into(),
        role: "user".into(),
    };
    let err = user::create(&db, dup, &policy()).await.unwrap_err();
    assert_eq!(err.to_string(), "Username must be unique.");

    let steal_email = user::UserChanges {
        username: "bob".into(),
        email: ann.email.clone(),
        role: None,
        password_hash: None,
    };
    let err = user::replace(&db, bob.id, steal_email, &policy()).await.unwrap_err();
    assert_eq!(err.to_string(), "Email must be unique.");

    // Re-saving unchanged values must not trip the uniqueness check on itself.
    let same = user::UserChanges { username: "ann".into(), email: ann.email.clone(), role: None, password_hash: None };
    let saved = user::replace(&db, ann.id, same, &policy()).await?;
    assert_eq!(saved.password_hash, "hash");
    Ok(())
}

#[tokio::test]
async fn test_user_email_rules() -> Result<()> {
    let db = setup_test_db().await?;
    let wrong_domain = user::NewUser {
        username: "carl".into(),
        email: "carl@gmail.com".into(),
        password_hash: "h".into(),
        role: "user".into(),
    };
    match user::create(&db, wrong_domain, &policy()).await {
        Err(ModelError::Validation(msg)) => assert_eq!(msg, "User email must end with '@example.com'."),
        other => panic!("expected a domain error, got {:?}", other),
    }

    let company_role = user::NewUser {
        username: "acme".into(),
        email: "ops@company.com".into(),
        password_hash: "h".into(),
        role: "Company".into(),
    };
    let created = user::create(&db, company_role, &policy()).await?;
    assert_eq!(created.role, "company");

    let open = user::EmailPolicy::default();
    let anywhere = user::NewUser {
        username: "dora".into(),
        email: "dora@gmail.com".into(),
        password_hash: "h".into(),
        role: "user".into(),
    };
    assert!(user::create(&db, anywhere, &open).await.is_ok());

    let bad_format = user::NewUser {
        username: "eve".into(),
        email: "eve-at-example.com".into(),
        password_hash: "h".into(),
        role: "user".into(),
    };
    match user::create(&db, bad_format, &open).await {
        Err(ModelError::Validation(msg)) => assert_eq!(msg, "Email format is invalid."),
        other => panic!("expected a format error, got {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_profile_requires_existing_user() -> Result<()> {
    let db = setup_test_db().await?;
    let new = profile::NewProfile {
        user_id: 999,
        first_name: "Ann".into(),
        last_name: "Lee".into(),
        phone_number: "555-0101".into(),
        preferences: None,
    };
    let err = profile::create(&db, new).await.unwrap_err();
    assert_eq!(err.to_string(), "User 999 does not exist.");
    Ok(())
}

#[tokio::test]
async fn test_profile_replace_and_delete() -> Result<()> {
    let db = setup_test_db().await?;
    let ann = make_user(&db, "ann").await?;
    let mut new = profile::NewProfile {
        user_id: ann.id,
        first_name: "Ann".into(),
        last_name: "Lee".into(),
        phone_number: "555-0101".into(),
        preferences: Some("mornings".into()),
    };
    let created = profile::create(&db, new.clone()).await?;

    new.last_name = "Smith".into();
    new.preferences = None;
    let replaced = profile::replace(&db, created.id, new.clone()).await?;
    assert_eq!(replaced.last_name, "Smith");
    assert_eq!(replaced.preferences, None);

    assert!(matches!(profile::replace(&db, 4242, new).await, Err(ModelError::NotFound(_))));
    assert!(profile::delete(&db, created.id).await?);
    assert!(!profile::delete(&db, created.id).await?);
    Ok(())
}

#[tokio::test]
async fn test_checklist_and_inventory_normalise_enumerations() -> Result<()> {
    let db = setup_test_db().await?;
    let ann = make_user(&db, "ann").await?;
    let list = checklist::create(&db, checklist::NewChecklist { user_id: ann.id, home_type: "two_bedroom".into() }).await?;
    assert_eq!(list.home_type, "Two Bedroom");

    let bad = checklist::create(&db, checklist::NewChecklist { user_id: ann.id, home_type: "Castle".into() }).await;
    assert!(matches!(bad, Err(ModelError::Validation(_))));

    let item = inventory::create(
        &db,
        inventory::NewInventoryItem {
            checklist_id: list.id,
            item_name: "Sofa".into(),
            status: "not packed".into(),
            notes: None,
        },
    )
    .await?;
    assert_eq!(item.status, "Not Packed");

    let orphan = inventory::NewInventoryItem {
        checklist_id: list.id + 100,
        item_name: "Lamp".into(),
        status: "Packed".into(),
        notes: None,
    };
    assert!(inventory::create(&db, orphan).await.is_err());
    Ok(())
}

#[tokio::test]
async fn test_quote_price_and_status() -> Result<()> {
    let db = setup_test_db().await?;
    let chain = make_chain(&db, "ann").await?;
    let negative = quote::NewQuote { move_id: chain.mv.id, price: -5.0, status: "pending".into() };
    assert!(quote::create(&db, negative).await.is_err());

    let accepted = quote::NewQuote { move_id: chain.mv.id, price: 300.5, status: "ACCEPTED".into() };
    let replaced = quote::replace(&db, chain.quote.id, accepted).await?;
    assert_eq!(replaced.status, "accepted");
    assert_eq!(replaced.price, 300.5);
    Ok(())
}

#[tokio::test]
async fn test_notification_round_trip() -> Result<()> {
    let db = setup_test_db().await?;
    let chain = make_chain(&db, "ann").await?;
    let at = Utc::now().naive_utc().date().and_hms_opt(10, 0, 0).unwrap();
    let created = notification::create(
        &db,
        notification::NewNotification { booking_id: chain.booking.id, message: "Truck booked".into(), timestamp: at },
    )
    .await?;
    let found = notification::Entity::find_by_id(created.id).one(&db).await?.unwrap();
    assert_eq!(found.message, "Truck booked");
    assert_eq!(found.timestamp, at);
    Ok(())
}
