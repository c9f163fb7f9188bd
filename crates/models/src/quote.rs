use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validation;
use crate::{booking, moves};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "quotes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub move_id: i32,
    pub price: f64,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Move,
    Booking,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Move => Entity::belongs_to(moves::Entity).from(Column::MoveId).to(moves::Column::Id).into(),
            Relation::Booking => Entity::has_many(booking::Entity).into(),
        }
    }
}

impl Related<moves::Entity> for Entity {
    fn to() -> RelationDef { Relation::Move.def() }
}

impl Related<booking::Entity> for Entity {
    fn to() -> RelationDef { Relation::Booking.def() }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug)]
pub struct NewQuote {
    pub move_id: i32,
    pub price: f64,
    pub status: String,
}

pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<Model, ModelError> {
    Entity::find_by_id(id).one(db).await?.ok_or_else(|| ModelError::not_found("Quote"))
}

pub async fn ensure_exists<C: ConnectionTrait>(db: &C, id: i32) -> Result<(), ModelError> {
    match Entity::find_by_id(id).one(db).await? {
        Some(_) => Ok(()),
        None => Err(ModelError::Validation(format!("Quote {} does not exist.", id))),
    }
}

pub async fn create<C: ConnectionTrait>(db: &C, new: NewQuote) -> Result<Model, ModelError> {
    let price = validation::validate_price(new.price)?;
    let status = validation::quote_status(&new.status)?;
    moves::ensure_exists(db, new.move_id).await?;
    let am = ActiveModel { move_id: Set(new.move_id), price: Set(price), status: Set(status), ..Default::default() };
    Ok(am.insert(db).await?)
}

pub async fn replace<C: ConnectionTrait>(db: &C, id: i32, new: NewQuote) -> Result<Model, ModelError> {
    let mut am: ActiveModel = find(db, id).await?.into();
    let price = validation::validate_price(new.price)?;
    let status = validation::quote_status(&new.status)?;
    moves::ensure_exists(db, new.move_id).await?;
    am.move_id = Set(new.move_id);
    am.price = Set(price);
    am.status = Set(status);
    Ok(am.update(db).await?)
}

pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
