use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_user_profile_table::UserProfile;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PaymentRun::Table)
                    .if_not_exists()
                    .col(pk_auto(PaymentRun::Id))
                    .col(timestamp_with_time_zone(PaymentRun::RunDate))
                    .col(string(PaymentRun::Status).default("in_progress"))
                    .col(integer(PaymentRun::TotalInvoices).default(0))
                    .col(integer(PaymentRun::ApprovedCount).default(0))
                    .col(integer(PaymentRun::BlockedCount).default(0))
                    .col(big_integer(PaymentRun::ApprovedAmountPence).default(0))
                    .col(big_integer(PaymentRun::BlockedAmountPence).default(0))
                    .col(integer(PaymentRun::ProcessedBy))
                    .col(timestamp_with_time_zone_null(PaymentRun::CompletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payment_run_processed_by")
                            .from(PaymentRun::Table, PaymentRun::ProcessedBy)
                            .to(UserProfile::Table, UserProfile::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PaymentRun::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PaymentRun {
    Table,
    Id,
    RunDate,
    Status,
    TotalInvoices,
    ApprovedCount,
    BlockedCount,
    ApprovedAmountPence,
    BlockedAmountPence,
    ProcessedBy,
    CompletedAt,
}
