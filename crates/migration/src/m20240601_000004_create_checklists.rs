use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Checklists::Table)
                    .if_not_exists()
                    .col(pk_auto(Checklists::Id))
                    .col(integer(Checklists::UserId).not_null())
                    .col(string_len(Checklists::HomeType, 32).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_checklist_user")
                            .from(Checklists::Table, Checklists::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Checklists::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Checklists { Table, Id, UserId, HomeType }

#[derive(DeriveIden)]
enum Users { Table, Id }
