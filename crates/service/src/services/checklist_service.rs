use sea_orm::{DatabaseConnection, EntityTrait, ModelTrait, QueryOrder, TransactionTrait};
use serde::{Deserialize, Serialize};
use tracing::info;

use models::validation::{required, required_text, HOME_TYPES};
use models::{checklist, inventory};

use super::list_rows;
use crate::{errors::ServiceError, pagination::Pagination};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChecklistPayload {
    pub user_id: Option<i32>,
    pub home_type: Option<String>,
}

impl ChecklistPayload {
    pub fn validate(self) -> Result<checklist::NewChecklist, ServiceError> {
        Ok(checklist::NewChecklist {
            user_id: required(self.user_id, "user_id")?,
            home_type: required_text(self.home_type, "home_type")?,
        })
    }
}

/// Entry of the `/home_types` listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeTypeEntry {
    pub id: usize,
    #[serde(rename = "type")]
    pub kind: String,
}

pub fn home_types() -> Vec<HomeTypeEntry> {
    HOME_TYPES.iter().enumerate().map(|(i, t)| HomeTypeEntry { id: i + 1, kind: t.to_string() }).collect()
}

pub async fn create_checklist(db: &DatabaseConnection, payload: ChecklistPayload) -> Result<checklist::Model, ServiceError> {
    let new = payload.validate()?;
    let txn = db.begin().await?;
    let created = checklist::create(&txn, new).await?;
    txn.commit().await?;
    info!(checklist_id = created.id, home_type = %created.home_type, "checklist_created");
    Ok(created)
}

pub async fn get_checklist(db: &DatabaseConnection, id: i32) -> Result<Option<checklist::Model>, ServiceError> {
    Ok(checklist::Entity::find_by_id(id).one(db).await?)
}

pub async fn list_checklists(db: &DatabaseConnection, page: Option<Pagination>) -> Result<Vec<checklist::Model>, ServiceError> {
    Ok(list_rows!(db, checklist::Entity, checklist::Column::Id, page))
}

/// Items on one checklist.
pub async fn list_checklist_items(db: &DatabaseConnection, id: i32) -> Result<Vec<inventory::Model>, ServiceError> {
    let list = checklist::find(db, id).await?;
    Ok(list.find_related(inventory::Entity).order_by_asc(inventory::Column::Id).all(db).await?)
}

pub async fn update_checklist(
    db: &DatabaseConnection,
    id: i32,
    payload: ChecklistPayload,
) -> Result<checklist::Model, ServiceError> {
    let new = payload.validate()?;
    let txn = db.begin().await?;
    let updated = checklist::replace(&txn, id, new).await?;
    txn.commit().await?;
    info!(checklist_id = id, "checklist_updated");
    Ok(updated)
}

pub async fn delete_checklist(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let txn = db.begin().await?;
    let removed = checklist::delete(&txn, id).await?;
    txn.commit().await?;
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_types_are_numbered_from_one() {
        let types = home_types();
        assert_eq!(types.len(), 4);
        assert_eq!(types[0], HomeTypeEntry { id: 1, kind: "Bedsitter".into() });
        let json = serde_json::to_value(&types[3]).unwrap();
        assert_eq!(json["type"], "Two Bedroom");
    }
}
