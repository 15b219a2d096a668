use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000002_create_contractor_table::Contractor;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Invoice::Table)
                    .if_not_exists()
                    .col(pk_auto(Invoice::Id))
                    .col(integer(Invoice::ContractorId))
                    .col(string(Invoice::InvoiceNumber))
                    .col(big_integer(Invoice::AmountPence))
                    .col(string(Invoice::Status).default("pending"))
                    .col(text_null(Invoice::PaymentBlockReason))
                    .col(timestamp_with_time_zone_null(Invoice::ComplianceCheckAt))
                    .col(
                        timestamp_with_time_zone(Invoice::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invoice_contractor_id")
                            .from(Invoice::Table, Invoice::ContractorId)
                            .to(Contractor::Table, Contractor::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_invoice_status")
                    .table(Invoice::Table)
                    .col(Invoice::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Invoice::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Invoice {
    Table,
    Id,
    ContractorId,
    InvoiceNumber,
    AmountPence,
    Status,
    PaymentBlockReason,
    ComplianceCheckAt,
    CreatedAt,
}
