use sea_orm::{DatabaseConnection, EntityTrait, TransactionTrait};
use serde::{Deserialize, Serialize};
use tracing::info;

use models::profile;
use models::validation::{required, required_text};

use super::list_rows;
use crate::{errors::ServiceError, pagination::Pagination};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfilePayload {
    pub user_id: Option<i32>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub preferences: Option<String>,
}

impl ProfilePayload {
    pub fn validate(self) -> Result<profile::NewProfile, ServiceError> {
        Ok(profile::NewProfile {
            user_id: required(self.user_id, "user_id")?,
            first_name: required_text(self.first_name, "first_name")?,
            last_name: required_text(self.last_name, "last_name")?,
            phone_number: required_text(self.phone_number, "phone_number")?,
            preferences: self.preferences,
        })
    }
}

pub async fn create_profile(db: &DatabaseConnection, payload: ProfilePayload) -> Result<profile::Model, ServiceError> {
    let new = payload.validate()?;
    let txn = db.begin().await?;
    let created = profile::create(&txn, new).await?;
    txn.commit().await?;
    info!(profile_id = created.id, user_id = created.user_id, "profile_created");
    Ok(created)
}

pub async fn get_profile(db: &DatabaseConnection, id: i32) -> Result<Option<profile::Model>, ServiceError> {
    Ok(profile::Entity::find_by_id(id).one(db).await?)
}

pub async fn list_profiles(db: &DatabaseConnection, page: Option<Pagination>) -> Result<Vec<profile::Model>, ServiceError> {
    Ok(list_rows!(db, profile::Entity, profile::Column::Id, page))
}

pub async fn update_profile(db: &DatabaseConnection, id: i32, payload: ProfilePayload) -> Result<profile::Model, ServiceError> {
    let new = payload.validate()?;
    let txn = db.begin().await?;
    let updated = profile::replace(&txn, id, new).await?;
    txn.commit().await?;
    info!(profile_id = id, "profile_updated");
    Ok(updated)
}

pub async fn delete_profile(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let txn = db.begin().await?;
    let removed = profile::delete(&txn, id).await?;
    txn.commit().await?;
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::user_service::{create_user, UserPayload};
    use crate::test_support::{get_db, policy};

    #[tokio::test]
    async fn profile_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let user = create_user(
            &db,
            UserPayload {
                username: Some("alice".into()),
                email: Some("alice@example.com".into()),
                password: Some("password1".into()),
                role: Some("user".into()),
            },
            &policy(),
        )
        .await?;
        let payload = ProfilePayload {
            user_id: Some(user.id),
            first_name: Some("Alice".into()),
            last_name: Some("Johnson".into()),
            phone_number: Some("555-1234".into()),
            preferences: None,
        };
        let created = create_profile(&db, payload.clone()).await?;
        assert_eq!(list_profiles(&db, None).await?.len(), 1);

        let mut partial = payload;
        partial.phone_number = None;
        let err = update_profile(&db, created.id, partial).await.unwrap_err();
        assert_eq!(err.to_string(), "Phone number must be provided.");

        assert!(delete_profile(&db, created.id).await?);
        assert!(get_profile(&db, created.id).await?.is_none());
        Ok(())
    }
}
