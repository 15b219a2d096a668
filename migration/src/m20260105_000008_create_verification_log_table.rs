use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VerificationLog::Table)
                    .if_not_exists()
                    .col(pk_auto(VerificationLog::Id))
                    .col(integer_null(VerificationLog::ContractorId))
                    .col(integer_null(VerificationLog::ComplianceDocumentId))
                    .col(string(VerificationLog::VerificationType))
                    .col(string(VerificationLog::LicenceNumber))
                    .col(boolean(VerificationLog::Success))
                    .col(text(VerificationLog::Detail))
                    .col(integer(VerificationLog::PerformedBy))
                    .col(
                        timestamp_with_time_zone(VerificationLog::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VerificationLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum VerificationLog {
    Table,
    Id,
    ContractorId,
    ComplianceDocumentId,
    VerificationType,
    LicenceNumber,
    Success,
    Detail,
    PerformedBy,
    CreatedAt,
}
