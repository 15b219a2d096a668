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
                    .table(ComplianceDocument::Table)
                    .if_not_exists()
                    .col(pk_auto(ComplianceDocument::Id))
                    .col(integer(ComplianceDocument::ContractorId))
                    .col(string(ComplianceDocument::DocumentType))
                    .col(string_null(ComplianceDocument::Reference))
                    .col(string(ComplianceDocument::Status).default("pending"))
                    .col(integer_null(ComplianceDocument::VerificationScore))
                    .col(timestamp_with_time_zone_null(ComplianceDocument::ExpiresAt))
                    .col(timestamp_with_time_zone_null(ComplianceDocument::VerifiedAt))
                    .col(integer_null(ComplianceDocument::ReviewedBy))
                    .col(timestamp_with_time_zone_null(ComplianceDocument::ReviewedAt))
                    .col(text_null(ComplianceDocument::ReviewNotes))
                    .col(
                        timestamp_with_time_zone(ComplianceDocument::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_compliance_document_contractor_id")
                            .from(ComplianceDocument::Table, ComplianceDocument::ContractorId)
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
                    .name("idx_compliance_document_expires_at")
                    .table(ComplianceDocument::Table)
                    .col(ComplianceDocument::ExpiresAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ComplianceDocument::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ComplianceDocument {
    Table,
    Id,
    ContractorId,
    DocumentType,
    Reference,
    Status,
    VerificationScore,
    ExpiresAt,
    VerifiedAt,
    ReviewedBy,
    ReviewedAt,
    ReviewNotes,
    CreatedAt,
}
