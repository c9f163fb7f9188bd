use chrono::NaiveDate;
use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{booking, moving_company, quote, user};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "moves")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub company_id: i32,
    pub current_address: String,
    pub new_address: String,
    pub moving_date: Date,
    pub special_requirements: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
    MovingCompany,
    Quote,
    Booking,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user::Entity).from(Column::UserId).to(user::Column::Id).into(),
            Relation::MovingCompany => Entity::belongs_to(moving_company::Entity)
                .from(Column::CompanyId)
                .to(moving_company::Column::Id)
                .into(),
            Relation::Quote => Entity::has_many(quote::Entity).into(),
            Relation::Booking => Entity::has_many(booking::Entity).into(),
        }
    }
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef { Relation::User.def() }
}

impl Related<moving_company::Entity> for Entity {
    fn to() -> RelationDef { Relation::MovingCompany.def() }
}

impl Related<quote::Entity> for Entity {
    fn to() -> RelationDef { Relation::Quote.def() }
}

impl Related<booking::Entity> for Entity {
    fn to() -> RelationDef { Relation::Booking.def() }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug)]
pub struct NewMove {
    pub user_id: i32,
    pub company_id: i32,
    pub current_address: String,
    pub new_address: String,
    pub moving_date: NaiveDate,
    pub special_requirements: Option<String>,
}

pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<Model, ModelError> {
    Entity::find_by_id(id).one(db).await?.ok_or_else(|| ModelError::not_found("Move"))
}

pub async fn ensure_exists<C: ConnectionTrait>(db: &C, id: i32) -> Result<(), ModelError> {
    match Entity::find_by_id(id).one(db).await? {
        Some(_) => Ok(()),
        None => Err(ModelError::Validation(format!("Move {} does not exist.", id))),
    }
}

async fn check_refs<C: ConnectionTrait>(db: &C, new: &NewMove) -> Result<(), ModelError> {
    user::ensure_exists(db, new.user_id).await?;
    moving_company::ensure_exists(db, new.company_id).await
}

pub async fn create<C: ConnectionTrait>(db: &C, new: NewMove) -> Result<Model, ModelError> {
    check_refs(db, &new).await?;
    let am = ActiveModel {
        user_id: Set(new.user_id),
        company_id: Set(new.company_id),
        current_address: Set(new.current_address),
        new_address: Set(new.new_address),
        moving_date: Set(new.moving_date),
        special_requirements: Set(new.special_requirements),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn replace<C: ConnectionTrait>(db: &C, id: i32, new: NewMove) -> Result<Model, ModelError> {
    let mut am: ActiveModel = find(db, id).await?.into();
    check_refs(db, &new).await?;
    am.user_id = Set(new.user_id);
    am.company_id = Set(new.company_id);
    am.current_address = Set(new.current_address);
    am.new_address = Set(new.new_address);
    am.moving_date = Set(new.moving_date);
    am.special_requirements = Set(new.special_requirements);
    Ok(am.update(db).await?)
}

pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
