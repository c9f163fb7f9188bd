use sea_orm::{DatabaseConnection, EntityTrait, TransactionTrait};
use serde::{Deserialize, Serialize};
use tracing::info;

use models::inventory;
use models::validation::{required, required_text};

use super::list_rows;
use crate::{errors::ServiceError, pagination::Pagination};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryPayload {
    pub checklist_id: Option<i32>,
    pub item_name: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

impl InventoryPayload {
    pub fn validate(self) -> Result<inventory::NewInventoryItem, ServiceError> {
        Ok(inventory::NewInventoryItem {
            checklist_id: required(self.checklist_id, "checklist_id")?,
            item_name: required_text(self.item_name, "item_name")?,
            status: required_text(self.status, "status")?,
            notes: self.notes,
        })
    }
}

pub async fn create_item(db: &DatabaseConnection, payload: InventoryPayload) -> Result<inventory::Model, ServiceError> {
    let new = payload.validate()?;
    let txn = db.begin().await?;
    let created = inventory::create(&txn, new).await?;
    txn.commit().await?;
    info!(item_id = created.id, checklist_id = created.checklist_id, "inventory_item_created");
    Ok(created)
}

pub async fn get_item(db: &DatabaseConnection, id: i32) -> Result<Option<inventory::Model>, ServiceError> {
    Ok(inventory::Entity::find_by_id(id).one(db).await?)
}

pub async fn list_items(db: &DatabaseConnection, page: Option<Pagination>) -> Result<Vec<inventory::Model>, ServiceError> {
    Ok(list_rows!(db, inventory::Entity, inventory::Column::Id, page))
}

pub async fn update_item(db: &DatabaseConnection, id: i32, payload: InventoryPayload) -> Result<inventory::Model, ServiceError> {
    let new = payload.validate()?;
    let txn = db.begin().await?;
    let updated = inventory::replace(&txn, id, new).await?;
    txn.commit().await?;
    Ok(updated)
}

pub async fn delete_item(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let txn = db.begin().await?;
    let removed = inventory::delete(&txn, id).await?;
    txn.commit().await?;
    Ok(removed)
}
