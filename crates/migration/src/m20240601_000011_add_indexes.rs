//! Foreign-key lookup indexes. SQLite does not index FK columns on its own,
//! and every child listing and cascade walks them.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const INDEXES: &[(&str, &str, &str)] = &[
    ("idx_profiles_user", "profiles", "user_id"),
    ("idx_checklists_user", "checklists", "user_id"),
    ("idx_inventory_checklist", "inventory", "checklist_id"),
    ("idx_moves_user", "moves", "user_id"),
    ("idx_moves_company", "moves", "company_id"),
    ("idx_quotes_move", "quotes", "move_id"),
    ("idx_bookings_quote", "bookings", "quote_id"),
    ("idx_bookings_customer", "bookings", "customer_id"),
    ("idx_bookings_company", "bookings", "moving_company_id"),
    ("idx_bookings_move", "bookings", "move_id"),
    ("idx_notifications_booking", "notifications", "booking_id"),
    ("idx_communications_booking", "communications", "booking_id"),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table, column) in INDEXES {
            manager
                .create_index(
                    Index::create()
                        .name(*name)
                        .table(Alias::new(*table))
                        .col(Alias::new(*column))
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table, _) in INDEXES {
            manager
                .drop_index(Index::drop().name(*name).table(Alias::new(*table)).to_owned())
                .await?;
        }
        Ok(())
    }
}
