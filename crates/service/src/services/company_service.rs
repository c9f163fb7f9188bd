use sea_orm::{DatabaseConnection, EntityTrait, TransactionTrait};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use models::moving_company;
use models::validation::required_text;

use super::list_rows;
use crate::auth::service::hash_password;
use crate::{errors::ServiceError, pagination::Pagination};

/// Accepts the signup-form names `email` and `phone_number` as well.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyPayload {
    pub user_id: Option<i32>,
    pub name: Option<String>,
    #[serde(alias = "email")]
    pub contact_email: Option<String>,
    #[serde(alias = "phone_number")]
    pub contact_phone: Option<String>,
    pub address: Option<String>,
    pub rating: Option<f64>,
    pub password: Option<String>,
}

impl CompanyPayload {
    pub fn validate(self) -> Result<moving_company::NewMovingCompany, ServiceError> {
        let password_hash = match self.password.filter(|p| !p.is_empty()) {
            Some(p) => Some(hash_password(&p).map_err(|e| ServiceError::Db(e.to_string()))?),
            None => None,
        };
        Ok(moving_company::NewMovingCompany {
            user_id: self.user_id,
            name: required_text(self.name, "name")?,
            contact_email: required_text(self.contact_email, "contact_email")?,
            contact_phone: required_text(self.contact_phone, "contact_phone")?,
            address: required_text(self.address, "address")?,
            password_hash,
            rating: self.rating,
        })
    }
}

pub async fn create_company(
    db: &DatabaseConnection,
    payload: CompanyPayload,
) -> Result<moving_company::Model, ServiceError> {
    let new = payload.validate()?;
    let txn = db.begin().await?;
    let created = moving_company::create(&txn, new).await?;
    txn.commit().await?;
    info!(company_id = created.id, name = %created.name, "company_created");
    Ok(created)
}

pub async fn get_company(db: &DatabaseConnection, id: i32) -> Result<Option<moving_company::Model>, ServiceError> {
    Ok(moving_company::Entity::find_by_id(id).one(db).await?)
}

pub async fn list_companies(
    db: &DatabaseConnection,
    page: Option<Pagination>,
) -> Result<Vec<moving_company::Model>, ServiceError> {
    Ok(list_rows!(db, moving_company::Entity, moving_company::Column::Id, page))
}

/// Full replace. The stored password is kept unless a new one is sent.
pub async fn update_company(
    db: &DatabaseConnection,
    id: i32,
    payload: CompanyPayload,
) -> Result<moving_company::Model, ServiceError> {
    let new = payload.validate()?;
    let txn = db.begin().await?;
    let updated = moving_company::replace(&txn, id, new).await?;
    txn.commit().await?;
    info!(company_id = id, "company_updated");
    Ok(updated)
}

/// Fails with a validation error while moves or bookings still point at the company.
pub async fn delete_company(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let txn = db.begin().await?;
    let removed = match moving_company::delete(&txn, id).await {
        Ok(removed) => removed,
        Err(e) => {
            warn!(company_id = id, error = %e, "company_delete_blocked");
            return Err(e.into());
        }
    };
    txn.commit().await?;
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    fn payload() -> CompanyPayload {
        CompanyPayload {
            user_id: None,
            name: Some("Fast Movers".into()),
            contact_email: Some("info@fastmovers.com".into()),
            contact_phone: Some("555-7890".into()),
            address: Some("123 Main St".into()),
            rating: Some(4.5),
            password: None,
        }
    }

    #[tokio::test]
    async fn company_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let created = create_company(&db, payload()).await?;
        assert_eq!(created.password_hash, None);

        let mut change = payload();
        change.rating = Some(9.0);
        assert!(update_company(&db, created.id, change).await.is_err());

        let mut change = payload();
        change.password = Some("password1".into());
        let updated = update_company(&db, created.id, change).await?;
        assert!(updated.password_hash.is_some());

        // A later update without a password keeps the stored one.
        let kept = update_company(&db, created.id, payload()).await?;
        assert_eq!(kept.password_hash, updated.password_hash);

        assert!(delete_company(&db, created.id).await?);
        assert!(get_company(&db, created.id).await?.is_none());
        Ok(())
    }

    #[test]
    fn signup_field_names_are_accepted() {
        let p: CompanyPayload = serde_json::from_value(serde_json::json!({
            "name": "Quick Relocators",
            "email": "info@quickrelocators.com",
            "phone_number": "555-0123",
            "address": "456 Elm St"
        }))
        .unwrap();
        assert_eq!(p.contact_email.as_deref(), Some("info@quickrelocators.com"));
        assert_eq!(p.contact_phone.as_deref(), Some("555-0123"));
    }
}
