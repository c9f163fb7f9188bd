use sea_orm::{entity::prelude::*, ConnectionTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validation;
use crate::{booking, checklist, moves, moving_company, profile};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub role: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Profile,
    Checklist,
    Move,
    Booking,
    MovingCompany,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Profile => Entity::has_many(profile::Entity).into(),
            Relation::Checklist => Entity::has_many(checklist::Entity).into(),
            Relation::Move => Entity::has_many(moves::Entity).into(),
            Relation::Booking => Entity::has_many(booking::Entity).into(),
            Relation::MovingCompany => Entity::has_one(moving_company::Entity).into(),
        }
    }
}

impl Related<profile::Entity> for Entity {
    fn to() -> RelationDef { Relation::Profile.def() }
}

impl Related<checklist::Entity> for Entity {
    fn to() -> RelationDef { Relation::Checklist.def() }
}

impl Related<moves::Entity> for Entity {
    fn to() -> RelationDef { Relation::Move.def() }
}

impl Related<booking::Entity> for Entity {
    fn to() -> RelationDef { Relation::Booking.def() }
}

impl Related<moving_company::Entity> for Entity {
    fn to() -> RelationDef { Relation::MovingCompany.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Required email suffix per role. An empty domain disables the rule for that role.
#[derive(Clone, Debug, Default)]
pub struct EmailPolicy {
    pub user_domain: String,
    pub company_domain: String,
}

impl From<&configs::AuthConfig> for EmailPolicy {
    fn from(cfg: &configs::AuthConfig) -> Self {
        Self { user_domain: cfg.user_email_domain.clone(), company_domain: cfg.company_email_domain.clone() }
    }
}

impl EmailPolicy {
    pub fn check(&self, email: &str, role: &str) -> Result<(), ModelError> {
        let (domain, label) = match role {
            "user" => (&self.user_domain, "User"),
            "company" => (&self.company_domain, "Company"),
            _ => return Ok(()),
        };
        if domain.is_empty() || email.to_lowercase().ends_with(&format!("@{}", domain.to_lowercase())) {
            Ok(())
        } else {
            Err(ModelError::Validation(format!("{} email must end with '@{}'.", label, domain)))
        }
    }
}

#[derive(Clone, Debug)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

/// Field values for a full-record update. `None` keeps the stored value.
#[derive(Clone, Debug)]
pub struct UserChanges {
    pub username: String,
    pub email: String,
    pub role: Option<String>,
    pub password_hash: Option<String>,
}

pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<Model, ModelError> {
    Entity::find_by_id(id).one(db).await?.ok_or_else(|| ModelError::not_found("User"))
}

pub async fn find_by_email<C: ConnectionTrait>(db: &C, email: &str) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find().filter(Column::Email.eq(email)).one(db).await?)
}

pub async fn find_by_username<C: ConnectionTrait>(db: &C, username: &str) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find().filter(Column::Username.eq(username)).one(db).await?)
}

pub async fn ensure_exists<C: ConnectionTrait>(db: &C, id: i32) -> Result<(), ModelError> {
    match Entity::find_by_id(id).one(db).await? {
        Some(_) => Ok(()),
        None => Err(ModelError::Validation(format!("User {} does not exist.", id))),
    }
}

async fn check_unique<C: ConnectionTrait>(
    db: &C,
    username: &str,
    email: &str,
    exclude_id: Option<i32>,
) -> Result<(), ModelError> {
    if let Some(other) = find_by_username(db, username).await? {
        if Some(other.id) != exclude_id {
            return Err(ModelError::Validation("Username must be unique.".into()));
        }
    }
    if let Some(other) = find_by_email(db, email).await? {
        if Some(other.id) != exclude_id {
            return Err(ModelError::Validation("Email must be unique.".into()));
        }
    }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(db: &C, new: NewUser, policy: &EmailPolicy) -> Result<Model, ModelError> {
    let username = validation::required_text(Some(new.username), "username")?;
    let email = validation::required_text(Some(new.email), "email")?;
    validation::validate_email(&email)?;
    let role = validation::role(&new.role)?;
    policy.check(&email, &role)?;
    check_unique(db, &username, &email, None).await?;

    let am = ActiveModel {
        username: Set(username),
        email: Set(email),
        password_hash: Set(new.password_hash),
        role: Set(role),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn replace<C: ConnectionTrait>(
    db: &C,
    id: i32,
    changes: UserChanges,
    policy: &EmailPolicy,
) -> Result<Model, ModelError> {
    let current = find(db, id).await?;
    let username = validation::required_text(Some(changes.username), "username")?;
    let email = validation::required_text(Some(changes.email), "email")?;
    validation::validate_email(&email)?;
    let role = match changes.role {
        Some(r) => validation::role(&r)?,
        None => current.role.clone(),
    };
    policy.check(&email, &role)?;
    check_unique(db, &username, &email, Some(id)).await?;

    let mut am: ActiveModel = current.into();
    am.username = Set(username);
    am.email = Set(email);
    am.role = Set(role);
    if let Some(hash) = changes.password_hash {
        am.password_hash = Set(hash);
    }
    Ok(am.update(db).await?)
}

pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
