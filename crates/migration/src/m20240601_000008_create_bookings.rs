//! Create `bookings` table.
//!
//! A booking hangs off a quote, a customer, a company and a move. It is removed
//! with any of quote/customer/move; the company reference is restrictive.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bookings::Table)
                    .if_not_exists()
                    .col(pk_auto(Bookings::Id))
                    .col(integer(Bookings::QuoteId).not_null())
                    .col(integer(Bookings::CustomerId).not_null())
                    .col(integer(Bookings::MovingCompanyId).not_null())
                    .col(integer(Bookings::MoveId).not_null())
                    .col(date(Bookings::MoveDate).not_null())
                    .col(time(Bookings::MoveTime).not_null())
                    .col(string_len(Bookings::ConfirmationStatus, 16).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_quote")
                            .from(Bookings::Table, Bookings::QuoteId)
                            .to(Quotes::Table, Quotes::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_customer")
                            .from(Bookings::Table, Bookings::CustomerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_company")
                            .from(Bookings::Table, Bookings::MovingCompanyId)
                            .to(MovingCompanies::Table, MovingCompanies::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_move")
                            .from(Bookings::Table, Bookings::MoveId)
                            .to(Moves::Table, Moves::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Bookings::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Bookings {
    Table,
    Id,
    QuoteId,
    CustomerId,
    MovingCompanyId,
    MoveId,
    MoveDate,
    MoveTime,
    ConfirmationStatus,
}

#[derive(DeriveIden)]
enum Quotes { Table, Id }

#[derive(DeriveIden)]
enum Users { Table, Id }

#[derive(DeriveIden)]
enum MovingCompanies { Table, Id }

#[derive(DeriveIden)]
enum Moves { Table, Id }
