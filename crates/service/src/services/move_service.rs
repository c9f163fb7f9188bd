use sea_orm::{DatabaseConnection, EntityTrait, TransactionTrait};
use serde::{Deserialize, Serialize};
use tracing::info;

use models::moves;
use models::validation::{parse_date, required, required_text};

use super::list_rows;
use crate::{errors::ServiceError, pagination::Pagination};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovePayload {
    pub user_id: Option<i32>,
    pub company_id: Option<i32>,
    pub current_address: Option<String>,
    pub new_address: Option<String>,
    /// `YYYY-MM-DD`
    pub moving_date: Option<String>,
    pub special_requirements: Option<String>,
}

impl MovePayload {
    pub fn validate(self) -> Result<moves::NewMove, ServiceError> {
        let moving_date = required_text(self.moving_date, "moving_date")?;
        Ok(moves::NewMove {
            user_id: required(self.user_id, "user_id")?,
            company_id: required(self.company_id, "company_id")?,
            current_address: required_text(self.current_address, "current_address")?,
            new_address: required_text(self.new_address, "new_address")?,
            moving_date: parse_date(&moving_date, "moving_date")?,
            special_requirements: self.special_requirements,
        })
    }
}

pub async fn create_move(db: &DatabaseConnection, payload: MovePayload) -> Result<moves::Model, ServiceError> {
    let new = payload.validate()?;
    let txn = db.begin().await?;
    let created = moves::create(&txn, new).await?;
    txn.commit().await?;
    info!(move_id = created.id, company_id = created.company_id, "move_created");
    Ok(created)
}

pub async fn get_move(db: &DatabaseConnection, id: i32) -> Result<Option<moves::Model>, ServiceError> {
    Ok(moves::Entity::find_by_id(id).one(db).await?)
}

pub async fn list_moves(db: &DatabaseConnection, page: Option<Pagination>) -> Result<Vec<moves::Model>, ServiceError> {
    Ok(list_rows!(db, moves::Entity, moves::Column::Id, page))
}

pub async fn update_move(db: &DatabaseConnection, id: i32, payload: MovePayload) -> Result<moves::Model, ServiceError> {
    let new = payload.validate()?;
    let txn = db.begin().await?;
    let updated = moves::replace(&txn, id, new).await?;
    txn.commit().await?;
    info!(move_id = id, "move_updated");
    Ok(updated)
}

pub async fn delete_move(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let txn = db.begin().await?;
    let removed = moves::delete(&txn, id).await?;
    txn.commit().await?;
    Ok(removed)
}
