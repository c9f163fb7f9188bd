use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Communications::Table)
                    .if_not_exists()
                    .col(pk_auto(Communications::Id))
                    .col(integer(Communications::BookingId).not_null())
                    .col(text(Communications::Message).not_null())
                    .col(date_time(Communications::Timestamp).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_communication_booking")
                            .from(Communications::Table, Communications::BookingId)
                            .to(Bookings::Table, Bookings::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Communications::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Communications { Table, Id, BookingId, Message, Timestamp }

#[derive(DeriveIden)]
enum Bookings { Table, Id }
