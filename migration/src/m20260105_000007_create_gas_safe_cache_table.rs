use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GasSafeCache::Table)
                    .if_not_exists()
                    .col(string(GasSafeCache::LicenceNumber).primary_key())
                    .col(string_null(GasSafeCache::EngineerName))
                    .col(string_null(GasSafeCache::BusinessName))
                    .col(string(GasSafeCache::RegistrationStatus))
                    .col(boolean(GasSafeCache::IsValid))
                    .col(timestamp_with_time_zone_null(
                        GasSafeCache::RegistrationExpiresAt,
                    ))
                    .col(timestamp_with_time_zone(GasSafeCache::FetchedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GasSafeCache::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GasSafeCache {
    Table,
    LicenceNumber,
    EngineerName,
    BusinessName,
    RegistrationStatus,
    IsValid,
    RegistrationExpiresAt,
    FetchedAt,
}
