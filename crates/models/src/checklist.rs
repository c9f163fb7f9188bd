use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validation;
use crate::{inventory, user};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "checklists")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub home_type: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
    Inventory,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user::Entity).from(Column::UserId).to(user::Column::Id).into(),
            Relation::Inventory => Entity::has_many(inventory::Entity).into(),
        }
    }
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef { Relation::User.def() }
}

impl Related<inventory::Entity> for Entity {
    fn to() -> RelationDef { Relation::Inventory.def() }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug)]
pub struct NewChecklist {
    pub user_id: i32,
    pub home_type: String,
}

pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<Model, ModelError> {
    Entity::find_by_id(id).one(db).await?.ok_or_else(|| ModelError::not_found("Checklist"))
}

pub async fn ensure_exists<C: ConnectionTrait>(db: &C, id: i32) -> Result<(), ModelError> {
    match Entity::find_by_id(id).one(db).await? {
        Some(_) => Ok(()),
        None => Err(ModelError::Validation(format!("Checklist {} does not exist.", id))),
    }
}

pub async fn create<C: ConnectionTrait>(db: &C, new: NewChecklist) -> Result<Model, ModelError> {
    let home_type = validation::home_type(&new.home_type)?;
    user::ensure_exists(db, new.user_id).await?;
    let am = ActiveModel { user_id: Set(new.user_id), home_type: Set(home_type), ..Default::default() };
    Ok(am.insert(db).await?)
}

pub async fn replace<C: ConnectionTrait>(db: &C, id: i32, new: NewChecklist) -> Result<Model, ModelError> {
    let mut am: ActiveModel = find(db, id).await?.into();
    let home_type = validation::home_type(&new.home_type)?;
    user::ensure_exists(db, new.user_id).await?;
    am.user_id = Set(new.user_id);
    am.home_type = Set(home_type);
    Ok(am.update(db).await?)
}

pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
