//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_users;
mod m20240601_000002_create_moving_companies;
mod m20240601_000003_create_profiles;
mod m20240601_000004_create_checklists;
mod m20240601_000005_create_inventory;
mod m20240601_000006_create_moves;
mod m20240601_000007_create_quotes;
mod m20240601_000008_create_bookings;
mod m20240601_000009_create_notifications;
mod m20240601_000010_create_communications;
mod m20240601_000011_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_users::Migration),
            Box::new(m20240601_000002_create_moving_companies::Migration),
            Box::new(m20240601_000003_create_profiles::Migration),
            Box::new(m20240601_000004_create_checklists::Migration),
            Box::new(m20240601_000005_create_inventory::Migration),
            Box::new(m20240601_000006_create_moves::Migration),
            Box::new(m20240601_000007_create_quotes::Migration),
            Box::new(m20240601_000008_create_bookings::Migration),
            Box::new(m20240601_000009_create_notifications::Migration),
            Box::new(m20240601_000010_create_communications::Migration),
            // Indexes should always be applied last
            Box::new(m20240601_000011_add_indexes::Migration),
        ]
    }
}
