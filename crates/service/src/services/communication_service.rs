use sea_orm::{DatabaseConnection, EntityTrait, TransactionTrait};
use serde::{Deserialize, Serialize};
use tracing::info;

use models::communication;
use models::validation::{required, required_text, timestamp_or_now};

use super::list_rows;
use crate::{errors::ServiceError, pagination::Pagination};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommunicationPayload {
    pub booking_id: Option<i32>,
    pub message: Option<String>,
    /// Current UTC time when omitted.
    pub timestamp: Option<String>,
}

impl CommunicationPayload {
    pub fn validate(self) -> Result<communication::NewCommunication, ServiceError> {
        Ok(communication::NewCommunication {
            booking_id: required(self.booking_id, "booking_id")?,
            message: required_text(self.message, "message")?,
            timestamp: timestamp_or_now(self.timestamp, "timestamp")?,
        })
    }
}

pub async fn create_communication(db: &DatabaseConnection, payload: CommunicationPayload) -> Result<communication::Model, ServiceError> {
    let new = payload.validate()?;
    let txn = db.begin().await?;
    let created = communication::create(&txn, new).await?;
    txn.commit().await?;
    info!(communication_id = created.id, booking_id = created.booking_id, "communication_created");
    Ok(created)
}

pub async fn get_communication(db: &DatabaseConnection, id: i32) -> Result<Option<communication::Model>, ServiceError> {
    Ok(communication::Entity::find_by_id(id).one(db).await?)
}

pub async fn list_communications(db: &DatabaseConnection, page: Option<Pagination>) -> Result<Vec<communication::Model>, ServiceError> {
    Ok(list_rows!(db, communication::Entity, communication::Column::Id, page))
}

pub async fn update_communication(
    db: &DatabaseConnection,
    id: i32,
    payload: CommunicationPayload,
) -> Result<communication::Model, ServiceError> {
    let new = payload.validate()?;
    let txn = db.begin().await?;
    let updated = communication::replace(&txn, id, new).await?;
    txn.commit().await?;
    Ok(updated)
}

pub async fn delete_communication(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let txn = db.begin().await?;
    let removed = communication::delete(&txn, id).await?;
    txn.commit().await?;
    Ok(removed)
}
