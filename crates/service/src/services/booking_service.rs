use sea_orm::{DatabaseConnection, EntityTrait, TransactionTrait};
use serde::{Deserialize, Serialize};
use tracing::info;

use models::booking;
use models::validation::{parse_date, parse_time, required, required_text, BOOKING_STATUSES};

use super::list_rows;
use crate::{errors::ServiceError, pagination::Pagination};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingPayload {
    pub quote_id: Option<i32>,
    pub customer_id: Option<i32>,
    pub moving_company_id: Option<i32>,
    pub move_id: Option<i32>,
    pub move_date: Option<String>,
    pub move_time: Option<String>,
    /// Defaults to `pending`.
    pub confirmation_status: Option<String>,
}

impl BookingPayload {
    pub fn validate(self) -> Result<booking::NewBooking, ServiceError> {
        let move_date = required_text(self.move_date, "move_date")?;
        let move_time = required_text(self.move_time, "move_time")?;
        Ok(booking::NewBooking {
            quote_id: required(self.quote_id, "quote_id")?,
            customer_id: required(self.customer_id, "customer_id")?,
            moving_company_id: required(self.moving_company_id, "moving_company_id")?,
            move_id: required(self.move_id, "move_id")?,
            move_date: parse_date(&move_date, "move_date")?,
            move_time: parse_time(&move_time, "move_time")?,
            confirmation_status: self.confirmation_status.unwrap_or_else(|| BOOKING_STATUSES[0].to_string()),
        })
    }
}

pub async fn create_booking(db: &DatabaseConnection, payload: BookingPayload) -> Result<booking::Model, ServiceError> {
    let new = payload.validate()?;
    let txn = db.begin().await?;
    let created = booking::create(&txn, new).await?;
    txn.commit().await?;
    info!(booking_id = created.id, quote_id = created.quote_id, "booking_created");
    Ok(created)
}

pub async fn get_booking(db: &DatabaseConnection, id: i32) -> Result<Option<booking::Model>, ServiceError> {
    Ok(booking::Entity::find_by_id(id).one(db).await?)
}

pub async fn list_bookings(db: &DatabaseConnection, page: Option<Pagination>) -> Result<Vec<booking::Model>, ServiceError> {
    Ok(list_rows!(db, booking::Entity, booking::Column::Id, page))
}

pub async fn update_booking(
    db: &DatabaseConnection,
    id: i32,
    payload: BookingPayload,
) -> Result<booking::Model, ServiceError> {
    let new = payload.validate()?;
    let txn = db.begin().await?;
    let updated = booking::replace(&txn, id, new).await?;
    txn.commit().await?;
    info!(booking_id = id, status = %updated.confirmation_status, "booking_updated");
    Ok(updated)
}

/// Removes the booking's notifications and communications too.
pub async fn delete_booking(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let txn = db.begin().await?;
    let removed = booking::delete(&txn, id).await?;
    txn.commit().await?;
    Ok(removed)
}
