//! One module per resource. Every write runs in its own transaction.

pub mod user_service;
pub mod profile_service;
pub mod checklist_service;
pub mod inventory_service;
pub mod company_service;
pub mod move_service;
pub mod quote_service;
pub mod booking_service;
pub mod notification_service;
pub mod communication_service;

/// `SELECT` everything ordered by id, or one page of it.
macro_rules! list_rows {
    ($db:expr, $entity:ty, $id_col:expr, $page:expr) => {{
        use sea_orm::{EntityTrait, PaginatorTrait, QueryOrder};
        let query = <$entity>::find().order_by_asc($id_col);
        match $page {
            Some(p) => {
                let (page_idx, per_page) = p.normalize();
                query.paginate($db, per_page).fetch_page(page_idx).await?
            }
            None => query.all($db).await?,
        }
    }};
}

pub(crate) use list_rows;
