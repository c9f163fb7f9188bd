use chrono::{NaiveDate, NaiveTime};
use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validation;
use crate::{communication, moves, moving_company, notification, quote, user};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub quote_id: i32,
    pub customer_id: i32,
    pub moving_company_id: i32,
    pub move_id: i32,
    pub move_date: Date,
    pub move_time: Time,
    pub confirmation_status: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Quote,
    Customer,
    MovingCompany,
    Move,
    Notification,
    Communication,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Quote => Entity::belongs_to(quote::Entity).from(Column::QuoteId).to(quote::Column::Id).into(),
            Relation::Customer => Entity::belongs_to(user::Entity).from(Column::CustomerId).to(user::Column::Id).into(),
            Relation::MovingCompany => Entity::belongs_to(moving_company::Entity)
                .from(Column::MovingCompanyId)
                .to(moving_company::Column::Id)
                .into(),
            Relation::Move => Entity::belongs_to(moves::Entity).from(Column::MoveId).to(moves::Column::Id).into(),
            Relation::Notification => Entity::has_many(notification::Entity).into(),
            Relation::Communication => Entity::has_many(communication::Entity).into(),
        }
    }
}

impl Related<quote::Entity> for Entity {
    fn to() -> RelationDef { Relation::Quote.def() }
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef { Relation::Customer.def() }
}

impl Related<moving_company::Entity> for Entity {
    fn to() -> RelationDef { Relation::MovingCompany.def() }
}

impl Related<moves::Entity> for Entity {
    fn to() -> RelationDef { Relation::Move.def() }
}

impl Related<notification::Entity> for Entity {
    fn to() -> RelationDef { Relation::Notification.def() }
}

impl Related<communication::Entity> for Entity {
    fn to() -> RelationDef { Relation::Communication.def() }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug)]
pub struct NewBooking {
    pub quote_id: i32,
    pub customer_id: i32,
    pub moving_company_id: i32,
    pub move_id: i32,
    pub move_date: NaiveDate,
    pub move_time: NaiveTime,
    pub confirmation_status: String,
}

pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<Model, ModelError> {
    Entity::find_by_id(id).one(db).await?.ok_or_else(|| ModelError::not_found("Booking"))
}

pub async fn ensure_exists<C: ConnectionTrait>(db: &C, id: i32) -> Result<(), ModelError> {
    match Entity::find_by_id(id).one(db).await? {
        Some(_) => Ok(()),
        None => Err(ModelError::Validation(format!("Booking {} does not exist.", id))),
    }
}

async fn check_refs<C: ConnectionTrait>(db: &C, new: &NewBooking) -> Result<(), ModelError> {
    quote::ensure_exists(db, new.quote_id).await?;
    user::ensure_exists(db, new.customer_id).await?;
    moving_company::ensure_exists(db, new.moving_company_id).await?;
    moves::ensure_exists(db, new.move_id).await
}

pub async fn create<C: ConnectionTrait>(db: &C, new: NewBooking) -> Result<Model, ModelError> {
    let status = validation::booking_status(&new.confirmation_status)?;
    check_refs(db, &new).await?;
    let am = ActiveModel {
        quote_id: Set(new.quote_id),
        customer_id: Set(new.customer_id),
        moving_company_id: Set(new.moving_company_id),
        move_id: Set(new.move_id),
        move_date: Set(new.move_date),
        move_time: Set(new.move_time),
        confirmation_status: Set(status),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn replace<C: ConnectionTrait>(db: &C, id: i32, new: NewBooking) -> Result<Model, ModelError> {
    let mut am: ActiveModel = find(db, id).await?.into();
    let status = validation::booking_status(&new.confirmation_status)?;
    check_refs(db, &new).await?;
    am.quote_id = Set(new.quote_id);
    am.customer_id = Set(new.customer_id);
    am.moving_company_id = Set(new.moving_company_id);
    am.move_id = Set(new.move_id);
    am.move_date = Set(new.move_date);
    am.move_time = Set(new.move_time);
    am.confirmation_status = Set(status);
    Ok(am.update(db).await?)
}

pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
