use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000004_create_invoice_table::Invoice,
    m20260105_000005_create_payment_run_table::PaymentRun,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PaymentRunItem::Table)
                    .if_not_exists()
                    .col(pk_auto(PaymentRunItem::Id))
                    .col(integer(PaymentRunItem::PaymentRunId))
                    .col(integer(PaymentRunItem::InvoiceId))
                    .col(big_integer(PaymentRunItem::AmountPence))
                    .col(string(PaymentRunItem::Status))
                    .col(text_null(PaymentRunItem::BlockReason))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payment_run_item_payment_run_id")
                            .from(PaymentRunItem::Table, PaymentRunItem::PaymentRunId)
                            .to(PaymentRun::Table, PaymentRun::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payment_run_item_invoice_id")
                            .from(PaymentRunItem::Table, PaymentRunItem::InvoiceId)
                            .to(Invoice::Table, Invoice::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PaymentRunItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PaymentRunItem {
    Table,
    Id,
    PaymentRunId,
    InvoiceId,
    AmountPence,
    Status,
    BlockReason,
}
