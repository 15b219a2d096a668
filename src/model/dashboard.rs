use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct DashboardSummaryDto {
    pub contractors: u64,
    pub documents_pending_review: u64,
    pub documents_expiring_soon: u64,
    pub invoices_pending: u64,
    pub invoices_blocked: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ExpiringDocumentDto {
    pub document_id: i32,
    pub contractor_id: i32,
    pub contractor_name: Option<String>,
    pub document_type: String,
    pub expires_at: DateTime<Utc>,
    pub days_remaining: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PaymentBlockDto {
    pub invoice_id: i32,
    pub invoice_number: String,
    pub contractor_id: i32,
    pub contractor_name: Option<String>,
    pub amount_pence: i64,
    pub reason: Option<String>,
    pub blocked_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ActivityDto {
    pub id: i32,
    pub user_id: Option<i32>,
    pub action: String,
    pub entity_type: String,
    pub entity_id: Option<i32>,
    pub description: String,
    pub created_at: DateTime<Utc>,
}
