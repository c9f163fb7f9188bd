use std::sync::Arc;

use argon2::{password_hash::{PasswordHasher, PasswordVerifier, SaltString}, Argon2, PasswordHash};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header as JwtHeader, Validation};
use rand::rngs::OsRng;
use tracing::{debug, info, instrument};

use models::user::EmailPolicy;
use models::validation;

use super::domain::{
    AuthCompany, AuthUser, CompanySignupInput, LoginInput, NewAccount, NewCompanyAccount, SessionClaims, SessionKind,
    SignupInput,
};
use super::errors::AuthError;
use super::repository::AuthRepository;

/// Auth service configuration
#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub session_secret: String,
    pub session_ttl_hours: i64,
    pub email_policy: EmailPolicy,
}

impl From<&configs::AuthConfig> for AuthConfig {
    fn from(cfg: &configs::AuthConfig) -> Self {
        Self {
            session_secret: cfg.session_secret.clone(),
            session_ttl_hours: cfg.session_ttl_hours,
            email_policy: EmailPolicy::from(cfg),
        }
    }
}

/// Hash a password into an argon2 PHC string.
///
/// # Examples
/// ```
/// let hash = service::auth::service::hash_password("password1").unwrap();
/// assert!(hash.starts_with("$argon2"));
/// assert!(service::auth::service::verify_password("password1", &hash));
/// ```
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::HashError(e.to_string()))?
        .to_string())
}

/// False for a wrong password and for a malformed stored hash alike.
pub fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok(),
        Err(e) => {
            debug!(error = %e, "stored password hash is not a PHC string");
            false
        }
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Auth business service independent of web framework
pub struct AuthService<R: AuthRepository> {
    repo: Arc<R>,
    cfg: AuthConfig,
}

impl<R: AuthRepository> AuthService<R> {
    pub fn new(repo: Arc<R>, cfg: AuthConfig) -> Self { Self { repo, cfg } }

    /// Register a user account with a hashed password.
    #[instrument(skip(self, input), fields(username = ?input.username))]
    pub async fn signup(&self, input: SignupInput) -> Result<AuthUser, AuthError> {
        let (Some(username), Some(email), Some(password), Some(role)) =
            (present(input.username), present(input.email), input.password.filter(|p| !p.is_empty()), present(input.role))
        else {
            return Err(AuthError::Validation("Missing required fields".into()));
        };
        if self.repo.username_exists(&username).await? {
            return Err(AuthError::Conflict("Username already exists".into()));
        }
        if self.repo.find_user_by_email(&email).await?.is_some() {
            return Err(AuthError::Conflict("Email already exists".into()));
        }
        validation::validate_email(&email)?;
        let role = validation::role(&role)?;
        self.cfg.email_policy.check(&email, &role)?;

        let password_hash = hash_password(&password)?;
        let user = self.repo.create_user(NewAccount { username, email, password_hash, role }).await?;
        info!(user_id = user.id, role = %user.role, "user_signed_up");
        Ok(user)
    }

    /// Check a user's email and password.
    #[instrument(skip(self, input), fields(email = ?input.email))]
    pub async fn login(&self, input: LoginInput) -> Result<AuthUser, AuthError> {
        let (Some(email), Some(password)) = (present(input.email), input.password) else {
            return Err(AuthError::Unauthorized);
        };
        let stored = self.repo.find_user_by_email(&email).await?.ok_or(AuthError::Unauthorized)?;
        if !verify_password(&password, &stored.password_hash) {
            return Err(AuthError::Unauthorized);
        }
        info!(user_id = stored.user.id, "user_logged_in");
        Ok(stored.user)
    }

    /// Register a standalone moving company that signs in with its contact email.
    #[instrument(skip(self, input), fields(name = ?input.name))]
    pub async fn company_signup(&self, input: CompanySignupInput) -> Result<AuthCompany, AuthError> {
        let (Some(name), Some(email), Some(phone), Some(address), Some(password)) = (
            present(input.name),
            present(input.email),
            present(input.phone_number),
            present(input.address),
            input.password.filter(|p| !p.is_empty()),
        ) else {
            return Err(AuthError::Validation("Missing required fields".into()));
        };
        if self.repo.find_company_by_email(&email).await?.is_some() {
            return Err(AuthError::Conflict("Email already exists".into()));
        }
        validation::validate_email(&email)?;

        let password_hash = hash_password(&password)?;
        let company = self
            .repo
            .create_company(NewCompanyAccount {
                name,
                contact_email: email,
                contact_phone: phone,
                address,
                password_hash,
            })
            .await?;
        info!(company_id = company.id, "company_signed_up");
        Ok(company)
    }

    #[instrument(skip(self, input), fields(email = ?input.email))]
    pub async fn company_login(&self, input: LoginInput) -> Result<AuthCompany, AuthError> {
        let (Some(email), Some(password)) = (present(input.email), input.password) else {
            return Err(AuthError::Unauthorized);
        };
        let stored = self.repo.find_company_by_email(&email).await?.ok_or(AuthError::Unauthorized)?;
        let Some(hash) = stored.password_hash else {
            return Err(AuthError::Unauthorized);
        };
        if !verify_password(&password, &hash) {
            return Err(AuthError::Unauthorized);
        }
        info!(company_id = stored.company.id, "company_logged_in");
        Ok(stored.company)
    }

    /// Sign an HS256 session token for a user or company id.
    pub fn issue_token(&self, kind: SessionKind, id: i32) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = SessionClaims {
            sub: id.to_string(),
            kind,
            iat: now.timestamp(),
            exp: (now + Duration::hours(self.cfg.session_ttl_hours)).timestamp(),
        };
        encode(&JwtHeader::default(), &claims, &EncodingKey::from_secret(self.cfg.session_secret.as_bytes()))
            .map_err(|e| AuthError::TokenError(e.to_string()))
    }

    /// Check signature and expiry.
    pub fn verify_token(&self, token: &str) -> Result<SessionClaims, AuthError> {
        let data = decode::<SessionClaims>(
            token,
            &DecodingKey::from_secret(self.cfg.session_secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|e| AuthError::TokenError(e.to_string()))?;
        Ok(data.claims)
    }

    /// Resolve a session token to a still-existing user.
    pub async fn current_user(&self, token: &str) -> Result<AuthUser, AuthError> {
        let claims = self.verify_token(token)?;
        let id = match (claims.kind, claims.subject_id()) {
            (SessionKind::User, Some(id)) => id,
            _ => return Err(AuthError::Unauthorized),
        };
        self.repo.get_user(id).await?.ok_or(AuthError::Unauthorized)
    }

    pub async fn current_company(&self, token: &str) -> Result<AuthCompany, AuthError> {
        let claims = self.verify_token(token)?;
        let id = match (claims.kind, claims.subject_id()) {
            (SessionKind::Company, Some(id)) => id,
            _ => return Err(AuthError::Unauthorized),
        };
        self.repo.get_company(id).await?.ok_or(AuthError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::repository::mock::MockAuthRepository;

    fn svc() -> AuthService<MockAuthRepository> {
        AuthService::new(
            Arc::new(MockAuthRepository::default()),
            AuthConfig {
                session_secret: "test-secret".into(),
                session_ttl_hours: 1,
                email_policy: EmailPolicy { user_domain: "example.com".into(), company_domain: "company.com".into() },
            },
        )
    }

    fn signup_input(username: &str, email: &str) -> SignupInput {
        SignupInput {
            username: Some(username.into()),
            email: Some(email.into()),
            password: Some("password1".into()),
            role: Some("user".into()),
        }
    }

    #[tokio::test]
    async fn signup_then_login() {
        let svc = svc();
        let user = svc.signup(signup_input("ann", "ann@example.com")).await.unwrap();
        assert_eq!(user.role, "user");

        let logged = svc
            .login(LoginInput { email: Some("ann@example.com".into()), password: Some("password1".into()) })
            .await
            .unwrap();
        assert_eq!(logged.id, user.id);

        let wrong = svc.login(LoginInput { email: Some("ann@example.com".into()), password: Some("nope".into()) }).await;
        assert!(matches!(wrong, Err(AuthError::Unauthorized)));
    }

    #[tokio::test]
    async fn signup_reports_missing_and_duplicate_fields() {
        let svc = svc();
        let mut missing = signup_input("ann", "ann@example.com");
        missing.role = None;
        assert_eq!(svc.signup(missing).await.unwrap_err().to_string(), "Missing required fields");

        svc.signup(signup_input("ann", "ann@example.com")).await.unwrap();
        assert_eq!(
            svc.signup(signup_input("ann", "other@example.com")).await.unwrap_err().to_string(),
            "Username already exists"
        );
        assert_eq!(
            svc.signup(signup_input("bob", "ann@example.com")).await.unwrap_err().to_string(),
            "Email already exists"
        );
    }

    #[tokio::test]
    async fn signup_enforces_role_domain() {
        let svc = svc();
        let err = svc.signup(signup_input("ann", "ann@gmail.com")).await.unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));
    }

    #[tokio::test]
    async fn company_signup_and_login() {
        let svc = svc();
        let input = CompanySignupInput {
            name: Some("Swift Movers".into()),
            email: Some("swift@company.com".into()),
            phone_number: Some("555-0100".into()),
            address: Some("1 Depot Rd".into()),
            password: Some("password1".into()),
        };
        let company = svc.company_signup(input.clone()).await.unwrap();
        assert!(matches!(svc.company_signup(input).await, Err(AuthError::Conflict(_))));

        let logged = svc
            .company_login(LoginInput { email: Some("swift@company.com".into()), password: Some("password1".into()) })
            .await
            .unwrap();
        assert_eq!(logged.id, company.id);
    }

    #[tokio::test]
    async fn tokens_round_trip_and_are_kind_checked() {
        let svc = svc();
        let user = svc.signup(signup_input("ann", "ann@example.com")).await.unwrap();
        let token = svc.issue_token(SessionKind::User, user.id).unwrap();

        let claims = svc.verify_token(&token).unwrap();
        assert_eq!(claims.kind, SessionKind::User);
        assert_eq!(svc.current_user(&token).await.unwrap(), user);
        assert!(matches!(svc.current_company(&token).await, Err(AuthError::Unauthorized)));
        assert!(svc.verify_token("not-a-token").is_err());
    }
}
