use sea_orm::{DatabaseConnection, DbErr, EntityTrait, TransactionTrait};

use models::user::EmailPolicy;
use models::{moving_company, user};

use crate::auth::domain::{AuthCompany, AuthUser, NewAccount, NewCompanyAccount, StoredCompany, StoredUser};
use crate::auth::errors::AuthError;
use crate::auth::repository::AuthRepository;

pub struct SeaOrmAuthRepository {
    pub db: DatabaseConnection,
    pub policy: EmailPolicy,
}

impl SeaOrmAuthRepository {
    pub fn new(db: DatabaseConnection, policy: EmailPolicy) -> Self { Self { db, policy } }
}

fn repo_err(e: DbErr) -> AuthError { AuthError::Repository(e.to_string()) }

#[async_trait::async_trait]
impl AuthRepository for SeaOrmAuthRepository {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<StoredUser>, AuthError> {
        let found = user::find_by_email(&self.db, email).await?;
        Ok(found.map(|u| {
            let password_hash = u.password_hash.clone();
            StoredUser { user: AuthUser::from(u), password_hash }
        }))
    }

    async fn username_exists(&self, username: &str) -> Result<bool, AuthError> {
        Ok(user::find_by_username(&self.db, username).await?.is_some())
    }

    async fn create_user(&self, new: NewAccount) -> Result<AuthUser, AuthError> {
        let txn = self.db.begin().await.map_err(repo_err)?;
        let created = user::create(
            &txn,
            user::NewUser { username: new.username, email: new.email, password_hash: new.password_hash, role: new.role },
            &self.policy,
        )
        .await?;
        txn.commit().await.map_err(repo_err)?;
        Ok(created.into())
    }

    async fn get_user(&self, id: i32) -> Result<Option<AuthUser>, AuthError> {
        let found = user::Entity::find_by_id(id).one(&self.db).await.map_err(repo_err)?;
        Ok(found.map(AuthUser::from))
    }

    async fn find_company_by_email(&self, email: &str) -> Result<Option<StoredCompany>, AuthError> {
        let found = moving_company::find_by_contact_email(&self.db, email).await?;
        Ok(found.map(|c| {
            let password_hash = c.password_hash.clone();
            StoredCompany { company: AuthCompany::from(c), password_hash }
        }))
    }

    async fn create_company(&self, new: NewCompanyAccount) -> Result<AuthCompany, AuthError> {
        let txn = self.db.begin().await.map_err(repo_err)?;
        let created = moving_company::create(
            &txn,
            moving_company::NewMovingCompany {
                user_id: None,
                name: new.name,
                contact_email: new.contact_email,
                contact_phone: new.contact_phone,
                address: new.address,
                password_hash: Some(new.password_hash),
                rating: None,
            },
        )
        .await?;
        txn.commit().await.map_err(repo_err)?;
        Ok(created.into())
    }

    async fn get_company(&self, id: i32) -> Result<Option<AuthCompany>, AuthError> {
        let found = moving_company::Entity::find_by_id(id).one(&self.db).await.map_err(repo_err)?;
        Ok(found.map(AuthCompany::from))
    }
}
