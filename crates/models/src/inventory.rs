use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::checklist;
use crate::errors::ModelError;
use crate::validation;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inventory")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub checklist_id: i32,
    pub item_name: String,
    pub status: String,
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Checklist,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Checklist => {
                Entity::belongs_to(checklist::Entity).from(Column::ChecklistId).to(checklist::Column::Id).into()
            }
        }
    }
}

impl Related<checklist::Entity> for Entity {
    fn to() -> RelationDef { Relation::Checklist.def() }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug)]
pub struct NewInventoryItem {
    pub checklist_id: i32,
    pub item_name: String,
    pub status: String,
    pub notes: Option<String>,
}

pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<Model, ModelError> {
    Entity::find_by_id(id).one(db).await?.ok_or_else(|| ModelError::not_found("Inventory item"))
}

pub async fn create<C: ConnectionTrait>(db: &C, new: NewInventoryItem) -> Result<Model, ModelError> {
    let status = validation::inventory_status(&new.status)?;
    checklist::ensure_exists(db, new.checklist_id).await?;
    let am = ActiveModel {
        checklist_id: Set(new.checklist_id),
        item_name: Set(new.item_name),
        status: Set(status),
        notes: Set(new.notes),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn replace<C: ConnectionTrait>(db: &C, id: i32, new: NewInventoryItem) -> Result<Model, ModelError> {
    let mut am: ActiveModel = find(db, id).await?.into();
    let status = validation::inventory_status(&new.status)?;
    checklist::ensure_exists(db, new.checklist_id).await?;
    am.checklist_id = Set(new.checklist_id);
    am.item_name = Set(new.item_name);
    am.status = Set(status);
    am.notes = Set(new.notes);
    Ok(am.update(db).await?)
}

pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
