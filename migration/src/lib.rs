pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_user_profile_table;
mod m20260105_000002_create_contractor_table;
mod m20260105_000003_create_compliance_document_table;
mod m20260105_000004_create_invoice_table;
mod m20260105_000005_create_payment_run_table;
mod m20260105_000006_create_payment_run_item_table;
mod m20260105_000007_create_gas_safe_cache_table;
mod m20260105_000008_create_verification_log_table;
mod m20260105_000009_create_activity_log_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_user_profile_table::Migration),
            Box::new(m20260105_000002_create_contractor_table::Migration),
            Box::new(m20260105_000003_create_compliance_document_table::Migration),
            Box::new(m20260105_000004_create_invoice_table::Migration),
            Box::new(m20260105_000005_create_payment_run_table::Migration),
            Box::new(m20260105_000006_create_payment_run_item_table::Migration),
            Box::new(m20260105_000007_create_gas_safe_cache_table::Migration),
            Box::new(m20260105_000008_create_verification_log_table::Migration),
            Box::new(m20260105_000009_create_activity_log_table::Migration),
        ]
    }
}
