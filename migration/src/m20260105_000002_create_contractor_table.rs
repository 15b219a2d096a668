use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contractor::Table)
                    .if_not_exists()
                    .col(pk_auto(Contractor::Id))
                    .col(string(Contractor::Name))
                    .col(string(Contractor::Email))
                    .col(string_null(Contractor::GasSafeNumber))
                    .col(string(Contractor::Status).default("active"))
                    .col(
                        timestamp_with_time_zone(Contractor::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Contractor::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Contractor {
    Table,
    Id,
    Name,
    Email,
    GasSafeNumber,
    Status,
    CreatedAt,
}
