use anyhow::Result;
use sea_orm::{EntityTrait, PaginatorTrait, TransactionTrait};

use super::{policy, setup_test_db};
use crate::{profile, user};

#[tokio::test]
async fn test_transaction_commit() -> Result<()> {
    let db = setup_test_db().await?;
    let txn = db.begin().await?;
    let new = user::NewUser {
        username: "ann".into(),
        email: "ann@example.com".into(),
        password_hash: "h".into(),
        role: "user".into(),
    };
    let created = user::create(&txn, new, &policy()).await?;
    txn.commit().await?;
    assert!(user::Entity::find_by_id(created.id).one(&db).await?.is_some());
    Ok(())
}

#[tokio::test]
async fn test_rollback_discards_earlier_statements() -> Result<()> {
    let db = setup_test_db().await?;
    let txn = db.begin().await?;
    let new = user::NewUser {
        username: "ann".into(),
        email: "ann@example.com".into(),
        password_hash: "h".into(),
        role: "user".into(),
    };
    let created = user::create(&txn, new, &policy()).await?;
    let orphan = profile::NewProfile {
        user_id: created.id + 1,
        first_name: "Ghost".into(),
        last_name: "User".into(),
        phone_number: "000".into(),
        preferences: None,
    };
    assert!(profile::create(&txn, orphan).await.is_err());
    txn.rollback().await?;

    assert_eq!(user::Entity::find().count(&db).await?, 0);
    Ok(())
}
