use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Pending invoice as classified by a payment run or its preview.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PlannedInvoiceDto {
    pub invoice_id: i32,
    pub invoice_number: String,
    pub contractor_id: i32,
    pub contractor_name: Option<String>,
    pub amount_pence: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_reason: Option<String>,
}

/// What a payment run would do right now, without mutating anything.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PaymentRunPreviewDto {
    pub total_invoices: u64,
    pub approved_count: u64,
    pub blocked_count: u64,
    pub approved_amount_pence: i64,
    pub blocked_amount_pence: i64,
    pub approved: Vec<PlannedInvoiceDto>,
    pub blocked: Vec<PlannedInvoiceDto>,
}

/// Result of an executed payment run.
///
/// `run_id` is absent when there were no pending invoices to process.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PaymentRunResultDto {
    pub run_id: Option<i32>,
    pub processed: u64,
    pub approved_count: u64,
    pub blocked_count: u64,
    pub approved_amount_pence: i64,
    pub blocked_amount_pence: i64,
    pub total_amount_pence: i64,
    pub blocked_invoices: Vec<PlannedInvoiceDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PaymentRunDto {
    pub id: i32,
    pub run_date: DateTime<Utc>,
    pub status: String,
    pub total_invoices: i32,
    pub approved_count: i32,
    pub blocked_count: i32,
    pub approved_amount_pence: i64,
    pub blocked_amount_pence: i64,
    pub processed_by: i32,
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PaymentRunItemDto {
    pub id: i32,
    pub invoice_id: i32,
    pub amount_pence: i64,
    pub status: String,
    pub block_reason: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PaymentRunDetailDto {
    pub run: PaymentRunDto,
    pub items: Vec<PaymentRunItemDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PaginatedPaymentRunsDto {
    pub runs: Vec<PaymentRunDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
