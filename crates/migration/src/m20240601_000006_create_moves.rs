//! Create `moves` table.
//!
//! Moves disappear with their user but block deletion of the company they reference.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Moves::Table)
                    .if_not_exists()
                    .col(pk_auto(Moves::Id))
                    .col(integer(Moves::UserId).not_null())
                    .col(integer(Moves::CompanyId).not_null())
                    .col(string(Moves::CurrentAddress).not_null())
                    .col(string(Moves::NewAddress).not_null())
                    .col(date(Moves::MovingDate).not_null())
                    .col(string_null(Moves::SpecialRequirements))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_move_user")
                            .from(Moves::Table, Moves::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_move_company")
                            .from(Moves::Table, Moves::CompanyId)
                            .to(MovingCompanies::Table, MovingCompanies::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Moves::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Moves { Table, Id, UserId, CompanyId, CurrentAddress, NewAddress, MovingDate, SpecialRequirements }

#[derive(DeriveIden)]
enum Users { Table, Id }

#[derive(DeriveIden)]
enum MovingCompanies { Table, Id }
