//! Invoice factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating invoices for a contractor.
///
/// Defaults to a `pending` invoice for £100.00 numbered `"INV-{id}"`.
pub struct InvoiceFactory<'a> {
    db: &'a DatabaseConnection,
    contractor_id: i32,
    invoice_number: String,
    amount_pence: i64,
    status: String,
    payment_block_reason: Option<String>,
}

impl<'a> InvoiceFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, contractor_id: i32) -> Self {
        Self {
            db,
            contractor_id,
            invoice_number: format!("INV-{}", next_id()),
            amount_pence: 10_000,
            status: "pending".to_string(),
            payment_block_reason: None,
        }
    }

    pub fn invoice_number(mut self, invoice_number: impl Into<String>) -> Self {
        self.invoice_number = invoice_number.into();
        self
    }

    pub fn amount_pence(mut self, amount_pence: i64) -> Self {
        self.amount_pence = amount_pence;
        self
    }

    /// Sets the status (`pending`, `approved` or `blocked`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn payment_block_reason(mut self, reason: impl Into<String>) -> Self {
        self.payment_block_reason = Some(reason.into());
        self
    }

    pub async fn build(self) -> Result<entity::invoice::Model, DbErr> {
        entity::invoice::ActiveModel {
            id: ActiveValue::NotSet,
            contractor_id: ActiveValue::Set(self.contractor_id),
            invoice_number: ActiveValue::Set(self.invoice_number),
            amount_pence: ActiveValue::Set(self.amount_pence),
            status: ActiveValue::Set(self.status),
            payment_block_reason: ActiveValue::Set(self.payment_block_reason),
            compliance_check_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending invoice with default values.
pub async fn create_invoice(
    db: &DatabaseConnection,
    contractor_id: i32,
) -> Result<entity::invoice::Model, DbErr> {
    InvoiceFactory::new(db, contractor_id).build().await
}
