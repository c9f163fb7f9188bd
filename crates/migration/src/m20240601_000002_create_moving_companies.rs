//! Create `moving_companies` table with an optional, unique FK to `users`.
//!
//! Standalone companies (signed up through the company endpoints) have no owner.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MovingCompanies::Table)
                    .if_not_exists()
                    .col(pk_auto(MovingCompanies::Id))
                    .col(integer_null(MovingCompanies::UserId).unique_key())
                    .col(string(MovingCompanies::Name).not_null())
                    .col(string_len(MovingCompanies::ContactEmail, 255).not_null())
                    .col(string_len(MovingCompanies::ContactPhone, 64).not_null())
                    .col(string(MovingCompanies::Address).not_null())
                    .col(string_null(MovingCompanies::PasswordHash))
                    .col(double_null(MovingCompanies::Rating))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_moving_company_user")
                            .from(MovingCompanies::Table, MovingCompanies::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(MovingCompanies::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum MovingCompanies { Table, Id, UserId, Name, ContactEmail, ContactPhone, Address, PasswordHash, Rating }

#[derive(DeriveIden)]
enum Users { Table, Id }
