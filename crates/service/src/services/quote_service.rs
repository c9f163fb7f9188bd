use sea_orm::{DatabaseConnection, EntityTrait, TransactionTrait};
use serde::{Deserialize, Serialize};
use tracing::info;

use models::quote;
use models::validation::{required, QUOTE_STATUSES};

use super::list_rows;
use crate::{errors::ServiceError, pagination::Pagination};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuotePayload {
    pub move_id: Option<i32>,
    pub price: Option<f64>,
    /// Defaults to `pending`.
    pub status: Option<String>,
}

impl QuotePayload {
    pub fn validate(self) -> Result<quote::NewQuote, ServiceError> {
        Ok(quote::NewQuote {
            move_id: required(self.move_id, "move_id")?,
            price: required(self.price, "price")?,
            status: self.status.unwrap_or_else(|| QUOTE_STATUSES[0].to_string()),
        })
    }
}

pub async fn create_quote(db: &DatabaseConnection, payload: QuotePayload) -> Result<quote::Model, ServiceError> {
    let new = payload.validate()?;
    let txn = db.begin().await?;
    let created = quote::create(&txn, new).await?;
    txn.commit().await?;
    info!(quote_id = created.id, move_id = created.move_id, price = created.price, "quote_created");
    Ok(created)
}

pub async fn get_quote(db: &DatabaseConnection, id: i32) -> Result<Option<quote::Model>, ServiceError> {
    Ok(quote::Entity::find_by_id(id).one(db).await?)
}

pub async fn list_quotes(db: &DatabaseConnection, page: Option<Pagination>) -> Result<Vec<quote::Model>, ServiceError> {
    Ok(list_rows!(db, quote::Entity, quote::Column::Id, page))
}

pub async fn update_quote(db: &DatabaseConnection, id: i32, payload: QuotePayload) -> Result<quote::Model, ServiceError> {
    let new = payload.validate()?;
    let txn = db.begin().await?;
    let updated = quote::replace(&txn, id, new).await?;
    txn.commit().await?;
    info!(quote_id = id, status = %updated.status, "quote_updated");
    Ok(updated)
}

pub async fn delete_quote(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let txn = db.begin().await?;
    let removed = quote::delete(&txn, id).await?;
    txn.commit().await?;
    Ok(removed)
}
