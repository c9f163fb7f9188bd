use serde::{Deserialize, Serialize};

/// Signup input; every field is optional so a missing one can be reported instead of rejected by serde.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignupInput {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

/// Login input (users and companies)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanySignupInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub password: Option<String>,
}

/// Domain user (business view)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub role: String,
}

impl From<models::user::Model> for AuthUser {
    fn from(u: models::user::Model) -> Self {
        Self { id: u.id, username: u.username, email: u.email, role: u.role }
    }
}

/// Domain company (business view)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthCompany {
    pub id: i32,
    pub user_id: Option<i32>,
    pub name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub address: String,
    pub rating: Option<f64>,
}

impl From<models::moving_company::Model> for AuthCompany {
    fn from(c: models::moving_company::Model) -> Self {
        Self {
            id: c.id,
            user_id: c.user_id,
            name: c.name,
            contact_email: c.contact_email,
            contact_phone: c.contact_phone,
            address: c.address,
            rating: c.rating,
        }
    }
}

/// A user together with its stored password hash.
#[derive(Debug, Clone)]
pub struct StoredUser {
    pub user: AuthUser,
    pub password_hash: String,
}

/// Companies created through `/companies` may have no password.
#[derive(Debug, Clone)]
pub struct StoredCompany {
    pub company: AuthCompany,
    pub password_hash: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

#[derive(Debug, Clone)]
pub struct NewCompanyAccount {
    pub name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub address: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    User,
    Company,
}

/// JWT claims stored in the session cookie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Row id of the user or company
    pub sub: String,
    pub kind: SessionKind,
    pub iat: i64,
    pub exp: i64,
}

impl SessionClaims {
    pub fn subject_id(&self) -> Option<i32> { self.sub.parse().ok() }
}
