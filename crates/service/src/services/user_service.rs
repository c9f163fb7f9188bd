use sea_orm::{DatabaseConnection, EntityTrait, TransactionTrait};
use serde::{Deserialize, Serialize};
use tracing::info;

use models::user::{self, EmailPolicy};
use models::validation::required_text;

use super::list_rows;
use crate::auth::service::hash_password;
use crate::{errors::ServiceError, pagination::Pagination};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserPayload {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

fn hash(password: &str) -> Result<String, ServiceError> {
    hash_password(password).map_err(|e| ServiceError::Db(e.to_string()))
}

/// Create a user with a hashed password. All four fields are required.
pub async fn create_user(db: &DatabaseConnection, payload: UserPayload, policy: &EmailPolicy) -> Result<user::Model, ServiceError> {
    let new = user::NewUser {
        username: required_text(payload.username, "username")?,
        email: required_text(payload.email, "email")?,
        password_hash: hash(&required_text(payload.password, "password")?)?,
        role: required_text(payload.role, "role")?,
    };
    let txn = db.begin().await?;
    let created = user::create(&txn, new, policy).await?;
    txn.commit().await?;
    info!(user_id = created.id, "user_created");
    Ok(created)
}

pub async fn get_user(db: &DatabaseConnection, id: i32) -> Result<Option<user::Model>, ServiceError> {
    Ok(user::Entity::find_by_id(id).one(db).await?)
}

pub async fn list_users(db: &DatabaseConnection, page: Option<Pagination>) -> Result<Vec<user::Model>, ServiceError> {
    Ok(list_rows!(db, user::Entity, user::Column::Id, page))
}

/// Replace username and email. Role and password are changed only when given.
pub async fn update_user(
    db: &DatabaseConnection,
    id: i32,
    payload: UserPayload,
    policy: &EmailPolicy,
) -> Result<user::Model, ServiceError> {
    let changes = user::UserChanges {
        username: required_text(payload.username, "username")?,
        email: required_text(payload.email, "email")?,
        role: payload.role,
        password_hash: match payload.password.filter(|p| !p.is_empty()) {
            Some(p) => Some(hash(&p)?),
            None => None,
        },
    };
    let txn = db.begin().await?;
    let updated = user::replace(&txn, id, changes, policy).await?;
    txn.commit().await?;
    info!(user_id = id, "user_updated");
    Ok(updated)
}

/// Delete a user and, through the schema's cascades, everything it owns.
pub async fn delete_user(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let txn = db.begin().await?;
    let removed = user::delete(&txn, id).await?;
    txn.commit().await?;
    if removed {
        info!(user_id = id, "user_deleted");
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, policy};

    fn payload(username: &str) -> UserPayload {
        UserPayload {
            username: Some(username.into()),
            email: Some(format!("{}@example.com", username)),
            password: Some("password1".into()),
            role: Some("user".into()),
        }
    }

    #[tokio::test]
    async fn user_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let created = create_user(&db, payload("alice"), &policy()).await?;
        assert!(created.password_hash.starts_with("$argon2"));
        assert_eq!(get_user(&db, created.id).await?.map(|u| u.username), Some("alice".into()));

        let mut change = payload("alice2");
        change.password = None;
        change.role = None;
        let updated = update_user(&db, created.id, change, &policy()).await?;
        assert_eq!(updated.username, "alice2");
        assert_eq!(updated.password_hash, created.password_hash);

        assert!(delete_user(&db, created.id).await?);
        assert!(get_user(&db, created.id).await?.is_none());
        assert!(!delete_user(&db, created.id).await?);
        Ok(())
    }

    #[tokio::test]
    async fn missing_fields_are_named() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let mut p = payload("alice");
        p.email = None;
        let err = create_user(&db, p, &policy()).await.unwrap_err();
        assert_eq!(err.to_string(), "Email must be provided.");
        Ok(())
    }

    #[tokio::test]
    async fn pagination_pages_in_id_order() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        for name in ["u1", "u2", "u3"] {
            create_user(&db, payload(name), &policy()).await?;
        }
        let all = list_users(&db, None).await?;
        assert_eq!(all.len(), 3);
        let second = list_users(&db, Some(Pagination { page: 2, per_page: 2 })).await?;
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].username, "u3");
        Ok(())
    }
}
