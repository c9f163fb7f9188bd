use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Quotes::Table)
                    .if_not_exists()
                    .col(pk_auto(Quotes::Id))
                    .col(integer(Quotes::MoveId).not_null())
                    .col(double(Quotes::Price).not_null())
                    .col(string_len(Quotes::Status, 16).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_quote_move")
                            .from(Quotes::Table, Quotes::MoveId)
                            .to(Moves::Table, Moves::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Quotes::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Quotes { Table, Id, MoveId, Price, Status }

#[derive(DeriveIden)]
enum Moves { Table, Id }
