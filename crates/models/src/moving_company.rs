use sea_orm::{entity::prelude::*, ConnectionTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validation;
use crate::{booking, moves, user};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "moving_companies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub user_id: Option<i32>,
    pub name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub address: String,
    #[serde(skip_serializing, default)]
    pub password_hash: Option<String>,
    pub rating: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
    Move,
    Booking,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user::Entity).from(Column::UserId).to(user::Column::Id).into(),
            Relation::Move => Entity::has_many(moves::Entity).into(),
            Relation::Booking => Entity::has_many(booking::Entity).into(),
        }
    }
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef { Relation::User.def() }
}

impl Related<moves::Entity> for Entity {
    fn to() -> RelationDef { Relation::Move.def() }
}

impl Related<booking::Entity> for Entity {
    fn to() -> RelationDef { Relation::Booking.def() }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug)]
pub struct NewMovingCompany {
    pub user_id: Option<i32>,
    pub name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub address: String,
    /// `None` on replace keeps the stored hash.
    pub password_hash: Option<String>,
    pub rating: Option<f64>,
}

pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<Model, ModelError> {
    Entity::find_by_id(id).one(db).await?.ok_or_else(|| ModelError::not_found("Company"))
}

pub async fn find_by_contact_email<C: ConnectionTrait>(db: &C, email: &str) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find().filter(Column::ContactEmail.eq(email)).one(db).await?)
}

pub async fn ensure_exists<C: ConnectionTrait>(db: &C, id: i32) -> Result<(), ModelError> {
    match Entity::find_by_id(id).one(db).await? {
        Some(_) => Ok(()),
        None => Err(ModelError::Validation(format!("Company {} does not exist.", id))),
    }
}

async fn check<C: ConnectionTrait>(db: &C, new: &NewMovingCompany, exclude_id: Option<i32>) -> Result<(), ModelError> {
    validation::validate_email(&new.contact_email)?;
    if let Some(rating) = new.rating {
        validation::validate_rating(rating)?;
    }
    if let Some(user_id) = new.user_id {
        user::ensure_exists(db, user_id).await?;
        let owned = Entity::find().filter(Column::UserId.eq(user_id)).one(db).await?;
        if owned.is_some_and(|c| Some(c.id) != exclude_id) {
            return Err(ModelError::Validation(format!("User {} already owns a company.", user_id)));
        }
    }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(db: &C, new: NewMovingCompany) -> Result<Model, ModelError> {
    check(db, &new, None).await?;
    let am = ActiveModel {
        user_id: Set(new.user_id),
        name: Set(new.name),
        contact_email: Set(new.contact_email),
        contact_phone: Set(new.contact_phone),
        address: Set(new.address),
        password_hash: Set(new.password_hash),
        rating: Set(new.rating),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn replace<C: ConnectionTrait>(db: &C, id: i32, new: NewMovingCompany) -> Result<Model, ModelError> {
    let mut am: ActiveModel = find(db, id).await?.into();
    check(db, &new, Some(id)).await?;
    am.user_id = Set(new.user_id);
    am.name = Set(new.name);
    am.contact_email = Set(new.contact_email);
    am.contact_phone = Set(new.contact_phone);
    am.address = Set(new.address);
    am.rating = Set(new.rating);
    if let Some(hash) = new.password_hash {
        am.password_hash = Set(Some(hash));
    }
    Ok(am.update(db).await?)
}

/// Moves and bookings keep their company; a referenced company cannot be removed.
pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, ModelError> {
    let Some(company) = Entity::find_by_id(id).one(db).await? else {
        return Ok(false);
    };
    let move_count = company.find_related(moves::Entity).count(db).await?;
    let booking_count = company.find_related(booking::Entity).count(db).await?;
    if move_count > 0 || booking_count > 0 {
        return Err(ModelError::Validation(format!(
            "Company {} is still referenced by {} move(s) and {} booking(s).",
            id, move_count, booking_count
        )));
    }
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
