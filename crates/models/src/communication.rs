//! Free-text messages exchanged between a customer and a company about a booking.

use chrono::NaiveDateTime;
use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::booking;
use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "communications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub booking_id: i32,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub timestamp: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Booking,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Booking => {
                Entity::belongs_to(booking::Entity).from(Column::BookingId).to(booking::Column::Id).into()
            }
        }
    }
}

impl Related<booking::Entity> for Entity {
    fn to() -> RelationDef { Relation::Booking.def() }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug)]
pub struct NewCommunication {
    pub booking_id: i32,
    pub message: String,
    pub timestamp: NaiveDateTime,
}

pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<Model, ModelError> {
    Entity::find_by_id(id).one(db).await?.ok_or_else(|| ModelError::not_found("Communication"))
}

pub async fn create<C: ConnectionTrait>(db: &C, new: NewCommunication) -> Result<Model, ModelError> {
    booking::ensure_exists(db, new.booking_id).await?;
    let am = ActiveModel {
        booking_id: Set(new.booking_id),
        message: Set(new.message),
        timestamp: Set(new.timestamp),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn replace<C: ConnectionTrait>(db: &C, id: i32, new: NewCommunication) -> Result<Model, ModelError> {
    let mut am: ActiveModel = find(db, id).await?.into();
    booking::ensure_exists(db, new.booking_id).await?;
    am.booking_id = Set(new.booking_id);
    am.message = Set(new.message);
    am.timestamp = Set(new.timestamp);
    Ok(am.update(db).await?)
}

pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
