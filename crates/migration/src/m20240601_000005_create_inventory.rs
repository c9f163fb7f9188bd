//! Create `inventory` table; items are removed together with their checklist.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Inventory::Table)
                    .if_not_exists()
                    .col(pk_auto(Inventory::Id))
                    .col(integer(Inventory::ChecklistId).not_null())
                    .col(string(Inventory::ItemName).not_null())
                    .col(string_len(Inventory::Status, 16).not_null())
                    .col(string_null(Inventory::Notes))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inventory_checklist")
                            .from(Inventory::Table, Inventory::ChecklistId)
                            .to(Checklists::Table, Checklists::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Inventory::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Inventory { Table, Id, ChecklistId, ItemName, Status, Notes }

#[derive(DeriveIden)]
enum Checklists { Table, Id }
