use anyhow::Result;
use chrono::Utc;
use sea_orm::{EntityTrait, ModelTrait, PaginatorTrait};

use super::{make_chain, setup_test_db};
use crate::errors::ModelError;
use crate::{booking, communication, inventory, moves, moving_company, notification, quote, user};

#[tokio::test]
async fn test_user_delete_cascades_to_dependants() -> Result<()> {
    let db = setup_test_db().await?;
    let chain = make_chain(&db, "ann").await?;
    inventory::create(
        &db,
        inventory::NewInventoryItem {
            checklist_id: chain.checklist.id,
            item_name: "Bed".into(),
            status: "Packed".into(),
            notes: Some("fragile".into()),
        },
    )
    .await?;
    notification::create(
        &db,
        notification::NewNotification {
            booking_id: chain.booking.id,
            message: "Confirmed".into(),
            timestamp: Utc::now().naive_utc(),
        },
    )
    .await?;

    assert_eq!(chain.user.find_related(moves::Entity).count(&db).await?, 1);
    assert!(user::delete(&db, chain.user.id).await?);

    assert_eq!(inventory::Entity::find().count(&db).await?, 0);
    assert_eq!(moves::Entity::find().count(&db).await?, 0);
    assert_eq!(quote::Entity::find().count(&db).await?, 0);
    assert_eq!(booking::Entity::find().count(&db).await?, 0);
    assert_eq!(notification::Entity::find().count(&db).await?, 0);
    // Standalone companies outlive the customer.
    assert!(moving_company::Entity::find_by_id(chain.company.id).one(&db).await?.is_some());
    Ok(())
}

#[tokio::test]
async fn test_booking_delete_removes_messages() -> Result<()> {
    let db = setup_test_db().await?;
    let chain = make_chain(&db, "ann").await?;
    communication::create(
        &db,
        communication::NewCommunication {
            booking_id: chain.booking.id,
            message: "Can you bring boxes?".into(),
            timestamp: Utc::now().naive_utc(),
        },
    )
    .await?;
    assert_eq!(chain.booking.find_related(communication::Entity).count(&db).await?, 1);

    assert!(booking::delete(&db, chain.booking.id).await?);
    assert_eq!(communication::Entity::find().count(&db).await?, 0);
    assert!(quote::Entity::find_by_id(chain.quote.id).one(&db).await?.is_some());
    Ok(())
}

#[tokio::test]
async fn test_referenced_company_cannot_be_deleted() -> Result<()> {
    let db = setup_test_db().await?;
    let chain = make_chain(&db, "ann").await?;
    let err = moving_company::delete(&db, chain.company.id).await.unwrap_err();
    assert!(matches!(err, ModelError::Validation(_)));

    moves::delete(&db, chain.mv.id).await?;
    assert!(moving_company::delete(&db, chain.company.id).await?);
    assert!(!moving_company::delete(&db, chain.company.id).await?);
    Ok(())
}

#[tokio::test]
async fn test_user_owns_at_most_one_company() -> Result<()> {
    let db = setup_test_db().await?;
    let chain = make_chain(&db, "ann").await?;
    let owned = moving_company::NewMovingCompany {
        user_id: Some(chain.user.id),
        name: "Ann Hauling".into(),
        contact_email: "ann@company.com".into(),
        contact_phone: "555-0110".into(),
        address: "9 Yard Ln".into(),
        password_hash: None,
        rating: None,
    };
    let first = moving_company::create(&db, owned.clone()).await?;
    assert!(moving_company::create(&db, owned.clone()).await.is_err());
    // Replacing the owning company with the same owner is fine.
    assert!(moving_company::replace(&db, first.id, owned).await.is_ok());

    assert!(user::delete(&db, chain.user.id).await?);
    assert!(moving_company::Entity::find_by_id(first.id).one(&db).await?.is_none());
    Ok(())
}
