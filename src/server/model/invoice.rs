use chrono::{DateTime, Utc};
use std::str::FromStr;

use crate::{
    model::{
        dashboard::PaymentBlockDto,
        invoice::{InvoiceDto, InvoiceStatus, PaginatedInvoicesDto},
    },
    server::error::AppError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub id: i32,
    pub contractor_id: i32,
    pub invoice_number: String,
    pub amount_pence: i64,
    pub status: InvoiceStatus,
    pub payment_block_reason: Option<String>,
    pub compliance_check_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Invoice {
    pub fn from_entity(entity: entity::invoice::Model) -> Result<Self, AppError> {
        let status = InvoiceStatus::from_str(&entity.status).map_err(AppError::InternalError)?;

        Ok(Self {
            id: entity.id,
            contractor_id: entity.contractor_id,
            invoice_number: entity.invoice_number,
            amount_pence: entity.amount_pence,
            status,
            payment_block_reason: entity.payment_block_reason,
            compliance_check_at: entity.compliance_check_at,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> InvoiceDto {
        InvoiceDto {
            id: self.id,
            contractor_id: self.contractor_id,
            invoice_number: self.invoice_number,
            amount_pence: self.amount_pence,
            status: self.status,
            payment_block_reason: self.payment_block_reason,
            compliance_check_at: self.compliance_check_at,
            created_at: self.created_at,
        }
    }
}

/// Blocked invoice joined with its contractor's name.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentBlock {
    pub invoice: Invoice,
    pub contractor_name: Option<String>,
}

impl PaymentBlock {
    pub fn into_dto(self) -> PaymentBlockDto {
        PaymentBlockDto {
            invoice_id: self.invoice.id,
            invoice_number: self.invoice.invoice_number,
            contractor_id: self.invoice.contractor_id,
            contractor_name: self.contractor_name,
            amount_pence: self.invoice.amount_pence,
            reason: self.invoice.payment_block_reason,
            blocked_at: self.invoice.compliance_check_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedInvoices {
    pub invoices: Vec<Invoice>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedInvoices {
    pub fn into_dto(self) -> PaginatedInvoicesDto {
        PaginatedInvoicesDto {
            invoices: self.invoices.into_iter().map(Invoice::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
