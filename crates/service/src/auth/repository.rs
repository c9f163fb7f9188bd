use async_trait::async_trait;

use super::domain::{AuthCompany, AuthUser, NewAccount, NewCompanyAccount, StoredCompany, StoredUser};
use super::errors::AuthError;

/// Repository abstraction for auth-related persistence.
#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<StoredUser>, AuthError>;
    async fn username_exists(&self, username: &str) -> Result<bool, AuthError>;
    async fn create_user(&self, new: NewAccount) -> Result<AuthUser, AuthError>;
    async fn get_user(&self, id: i32) -> Result<Option<AuthUser>, AuthError>;

    async fn find_company_by_email(&self, email: &str) -> Result<Option<StoredCompany>, AuthError>;
    async fn create_company(&self, new: NewCompanyAccount) -> Result<AuthCompany, AuthError>;
    async fn get_company(&self, id: i32) -> Result<Option<AuthCompany>, AuthError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockAuthRepository {
        users: Mutex<Vec<StoredUser>>,
        companies: Mutex<Vec<StoredCompany>>,
    }

    #[async_trait]
    impl AuthRepository for MockAuthRepository {
        async fn find_user_by_email(&self, email: &str) -> Result<Option<StoredUser>, AuthError> {
            let users = self.users.lock().unwrap();
            Ok(users.iter().find(|u| u.user.email == email).cloned())
        }

        async fn username_exists(&self, username: &str) -> Result<bool, AuthError> {
            let users = self.users.lock().unwrap();
            Ok(users.iter().any(|u| u.user.username == username))
        }

        async fn create_user(&self, new: NewAccount) -> Result<AuthUser, AuthError> {
            let mut users = self.users.lock().unwrap();
            if users.iter().any(|u| u.user.email == new.email || u.user.username == new.username) {
                return Err(AuthError::Conflict("user already exists".into()));
            }
            let user = AuthUser { id: users.len() as i32 + 1, username: new.username, email: new.email, role: new.role };
            users.push(StoredUser { user: user.clone(), password_hash: new.password_hash });
            Ok(user)
        }

        async fn get_user(&self, id: i32) -> Result<Option<AuthUser>, AuthError> {
            let users = self.users.lock().unwrap();
            Ok(users.iter().find(|u| u.user.id == id).map(|u| u.user.clone()))
        }

        async fn find_company_by_email(&self, email: &str) -> Result<Option<StoredCompany>, AuthError> {
            let companies = self.companies.lock().unwrap();
            Ok(companies.iter().find(|c| c.company.contact_email == email).cloned())
        }

        async fn create_company(&self, new: NewCompanyAccount) -> Result<AuthCompany, AuthError> {
            let mut companies = self.companies.lock().unwrap();
            let company = AuthCompany {
                id: companies.len() as i32 + 1,
                user_id: None,
                name: new.name,
                contact_email: new.contact_email,
                contact_phone: new.contact_phone,
                address: new.address,
                rating: None,
            };
            companies.push(StoredCompany { company: company.clone(), password_hash: Some(new.password_hash) });
            Ok(company)
        }

        async fn get_company(&self, id: i32) -> Result<Option<AuthCompany>, AuthError> {
            let companies = self.companies.lock().unwrap();
            Ok(companies.iter().find(|c| c.company.id == id).map(|c| c.company.clone()))
        }
    }
}
