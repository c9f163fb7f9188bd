use sea_orm::{DatabaseConnection, EntityTrait, TransactionTrait};
use serde::{Deserialize, Serialize};
use tracing::info;

use models::notification;
use models::validation::{required, required_text, timestamp_or_now};

use super::list_rows;
use crate::{errors::ServiceError, pagination::Pagination};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationPayload {
    pub booking_id: Option<i32>,
    pub message: Option<String>,
    /// Current UTC time when omitted.
    pub timestamp: Option<String>,
}

impl NotificationPayload {
    pub fn validate(self) -> Result<notification::NewNotification, ServiceError> {
        Ok(notification::NewNotification {
            booking_id: required(self.booking_id, "booking_id")?,
            message: required_text(self.message, "message")?,
            timestamp: timestamp_or_now(self.timestamp, "timestamp")?,
        })
    }
}

pub async fn create_notification(db: &DatabaseConnection, payload: NotificationPayload) -> Result<notification::Model, ServiceError> {
    let new = payload.validate()?;
    let txn = db.begin().await?;
    let created = notification::create(&txn, new).await?;
    txn.commit().await?;
    info!(notification_id = created.id, booking_id = created.booking_id, "notification_created");
    Ok(created)
}

pub async fn get_notification(db: &DatabaseConnection, id: i32) -> Result<Option<notification::Model>, ServiceError> {
    Ok(notification::Entity::find_by_id(id).one(db).await?)
}

pub async fn list_notifications(db: &DatabaseConnection, page: Option<Pagination>) -> Result<Vec<notification::Model>, ServiceError> {
    Ok(list_rows!(db, notification::Entity, notification::Column::Id, page))
}

pub async fn update_notification(
    db: &DatabaseConnection,
    id: i32,
    payload: NotificationPayload,
) -> Result<notification::Model, ServiceError> {
    let new = payload.validate()?;
    let txn = db.begin().await?;
    let updated = notification::replace(&txn, id, new).await?;
    txn.commit().await?;
    Ok(updated)
}

pub async fn delete_notification(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let txn = db.begin().await?;
    let removed = notification::delete(&txn, id).await?;
    txn.commit().await?;
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_defaults_to_now() {
        let before = chrono::Utc::now().naive_utc();
        let p = NotificationPayload { booking_id: Some(1), message: Some("Booked".into()), timestamp: None };
        let new = p.validate().unwrap();
        assert!(new.timestamp >= before - chrono::Duration::seconds(1));
    }

    #[test]
    fn explicit_timestamp_is_parsed() {
        let p = NotificationPayload {
            booking_id: Some(1),
            message: Some("Booked".into()),
            timestamp: Some("2023-07-15 09:00:00".into()),
        };
        let new = p.validate().unwrap();
        assert_eq!(new.timestamp.to_string(), "2023-07-15 09:00:00");
    }
}
