//! Payment run domain models and invoice classification.
//!
//! A payment run takes every pending invoice together with its payment-block check and
//! partitions them into approved and blocked sets. `PaymentRunPlan::classify` is the pure
//! half of that process and backs both the preview endpoint and the executed run.

use chrono::{DateTime, Utc};
use std::str::FromStr;

use crate::{
    model::{
        invoice::InvoiceStatus,
        payment_run::{
            PaginatedPaymentRunsDto, PaymentRunDetailDto, PaymentRunDto, PaymentRunItemDto,
            PaymentRunPreviewDto, PaymentRunResultDto, PlannedInvoiceDto,
        },
    },
    server::{
        error::AppError,
        model::compliance::{assess_payment_block, ComplianceDocument},
    },
};

/// Reason recorded for a blocked invoice when the check did not supply one.
pub const DEFAULT_BLOCK_REASON: &str = "Compliance requirements not met";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentRunStatus {
    InProgress,
    Completed,
}

impl PaymentRunStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

/// A pending invoice with its precomputed payment-block check.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentBlockCheck {
    pub invoice_id: i32,
    pub invoice_number: String,
    pub contractor_id: i32,
    pub contractor_name: Option<String>,
    pub amount_pence: i64,
    pub can_pay: bool,
    pub block_reason: Option<String>,
}

impl PaymentBlockCheck {
    /// Builds the check for a pending invoice from its contractor and that contractor's
    /// compliance documents.
    ///
    /// A missing contractor row is treated as inactive.
    pub fn assess(
        invoice: &entity::invoice::Model,
        contractor: Option<&entity::contractor::Model>,
        documents: &[ComplianceDocument],
        now: DateTime<Utc>,
    ) -> Self {
        let active = contractor.is_some_and(|c| c.status == "active");
        let block_reason = assess_payment_block(active, documents, now);

        Self {
            invoice_id: invoice.id,
            invoice_number: invoice.invoice_number.clone(),
            contractor_id: invoice.contractor_id,
            contractor_name: contractor.map(|c| c.name.clone()),
            amount_pence: invoice.amount_pence,
            can_pay: block_reason.is_none(),
            block_reason,
        }
    }
}

/// An invoice after classification. `block_reason` is set only for blocked invoices.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedInvoice {
    pub invoice_id: i32,
    pub invoice_number: String,
    pub contractor_id: i32,
    pub contractor_name: Option<String>,
    pub amount_pence: i64,
    pub block_reason: Option<String>,
}

impl PlannedInvoice {
    pub fn into_dto(self) -> PlannedInvoiceDto {
        PlannedInvoiceDto {
            invoice_id: self.invoice_id,
            invoice_number: self.invoice_number,
            contractor_id: self.contractor_id,
            contractor_name: self.contractor_name,
            amount_pence: self.amount_pence,
            block_reason: self.block_reason,
        }
    }
}

/// Disjoint approved and blocked sets covering every classified invoice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentRunPlan {
    pub approved: Vec<PlannedInvoice>,
    pub blocked: Vec<PlannedInvoice>,
}

impl PaymentRunPlan {
    /// Partitions checks by their `can_pay` flag.
    ///
    /// Blocked invoices keep the check's reason, or `DEFAULT_BLOCK_REASON` when the check
    /// carried none. Input order is preserved within each set.
    pub fn classify(checks: Vec<PaymentBlockCheck>) -> Self {
        let mut plan = Self::default();

        for check in checks {
            let planned = PlannedInvoice {
                invoice_id: check.invoice_id,
                invoice_number: check.invoice_number,
                contractor_id: check.contractor_id,
                contractor_name: check.contractor_name,
                amount_pence: check.amount_pence,
                block_reason: None,
            };

            if check.can_pay {
                plan.approved.push(planned);
            } else {
                plan.blocked.push(PlannedInvoice {
                    block_reason: Some(
                        check
                            .block_reason
                            .unwrap_or_else(|| DEFAULT_BLOCK_REASON.to_string()),
                    ),
                    ..planned
                });
            }
        }

        plan
    }

    pub fn is_empty(&self) -> bool {
        self.approved.is_empty() && self.blocked.is_empty()
    }

    pub fn total_invoices(&self) -> usize {
        self.approved.len() + self.blocked.len()
    }

    pub fn approved_amount(&self) -> i64 {
        sum_amounts(&self.approved)
    }

    pub fn blocked_amount(&self) -> i64 {
        sum_amounts(&self.blocked)
    }

    pub fn into_preview_dto(self) -> PaymentRunPreviewDto {
        PaymentRunPreviewDto {
            total_invoices: self.total_invoices() as u64,
            approved_count: self.approved.len() as u64,
            blocked_count: self.blocked.len() as u64,
            approved_amount_pence: self.approved_amount(),
            blocked_amount_pence: self.blocked_amount(),
            approved: self.approved.into_iter().map(PlannedInvoice::into_dto).collect(),
            blocked: self.blocked.into_iter().map(PlannedInvoice::into_dto).collect(),
        }
    }
}

fn sum_amounts(invoices: &[PlannedInvoice]) -> i64 {
    invoices.iter().map(|invoice| invoice.amount_pence).sum()
}

/// What an executed payment run actually applied.
///
/// Invoices that were no longer pending when the run reached them are left out.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRunOutcome {
    /// `None` when there was nothing to process and no run row was created.
    pub run_id: Option<i32>,
    pub applied: PaymentRunPlan,
}

impl PaymentRunOutcome {
    pub fn into_dto(self) -> PaymentRunResultDto {
        let approved_amount_pence = self.applied.approved_amount();
        let blocked_amount_pence = self.applied.blocked_amount();

        PaymentRunResultDto {
            run_id: self.run_id,
            processed: self.applied.total_invoices() as u64,
            approved_count: self.applied.approved.len() as u64,
            blocked_count: self.applied.blocked.len() as u64,
            approved_amount_pence,
            blocked_amount_pence,
            total_amount_pence: approved_amount_pence + blocked_amount_pence,
            blocked_invoices: self
                .applied
                .blocked
                .into_iter()
                .map(PlannedInvoice::into_dto)
                .collect(),
        }
    }
}

/// Parameters for recording one classified invoice on a run.
#[derive(Debug, Clone)]
pub struct CreatePaymentRunItemParams {
    pub payment_run_id: i32,
    pub invoice_id: i32,
    pub amount_pence: i64,
    pub status: InvoiceStatus,
    pub block_reason: Option<String>,
}

/// Totals written back onto a run when it completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentRunTotals {
    pub approved_count: i32,
    pub blocked_count: i32,
    pub approved_amount_pence: i64,
    pub blocked_amount_pence: i64,
}

impl PaymentRunTotals {
    pub fn from_plan(plan: &PaymentRunPlan) -> Self {
        Self {
            approved_count: plan.approved.len() as i32,
            blocked_count: plan.blocked.len() as i32,
            approved_amount_pence: plan.approved_amount(),
            blocked_amount_pence: plan.blocked_amount(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRun {
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

impl PaymentRun {
    pub fn from_entity(entity: entity::payment_run::Model) -> Self {
        Self {
            id: entity.id,
            run_date: entity.run_date,
            status: entity.status,
            total_invoices: entity.total_invoices,
            approved_count: entity.approved_count,
            blocked_count: entity.blocked_count,
            approved_amount_pence: entity.approved_amount_pence,
            blocked_amount_pence: entity.blocked_amount_pence,
            processed_by: entity.processed_by,
            completed_at: entity.completed_at,
        }
    }

    pub fn into_dto(self) -> PaymentRunDto {
        PaymentRunDto {
            id: self.id,
            run_date: self.run_date,
            status: self.status,
            total_invoices: self.total_invoices,
            approved_count: self.approved_count,
            blocked_count: self.blocked_count,
            approved_amount_pence: self.approved_amount_pence,
            blocked_amount_pence: self.blocked_amount_pence,
            processed_by: self.processed_by,
            completed_at: self.completed_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRunItem {
    pub id: i32,
    pub invoice_id: i32,
    pub amount_pence: i64,
    pub status: InvoiceStatus,
    pub block_reason: Option<String>,
}

impl PaymentRunItem {
    pub fn from_entity(entity: entity::payment_run_item::Model) -> Result<Self, AppError> {
        let status = InvoiceStatus::from_str(&entity.status).map_err(AppError::InternalError)?;

        Ok(Self {
            id: entity.id,
            invoice_id: entity.invoice_id,
            amount_pence: entity.amount_pence,
            status,
            block_reason: entity.block_reason,
        })
    }

    pub fn into_dto(self) -> PaymentRunItemDto {
        PaymentRunItemDto {
            id: self.id,
            invoice_id: self.invoice_id,
            amount_pence: self.amount_pence,
            status: self.status.as_str().to_string(),
            block_reason: self.block_reason,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRunDetail {
    pub run: PaymentRun,
    pub items: Vec<PaymentRunItem>,
}

impl PaymentRunDetail {
    pub fn into_dto(self) -> PaymentRunDetailDto {
        PaymentRunDetailDto {
            run: self.run.into_dto(),
            items: self.items.into_iter().map(PaymentRunItem::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedPaymentRuns {
    pub runs: Vec<PaymentRun>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedPaymentRuns {
    pub fn into_dto(self) -> PaginatedPaymentRunsDto {
        PaginatedPaymentRunsDto {
            runs: self.runs.into_iter().map(PaymentRun::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn check(
        invoice_id: i32,
        amount_pence: i64,
        can_pay: bool,
        reason: Option<&str>,
    ) -> PaymentBlockCheck {
        PaymentBlockCheck {
            invoice_id,
            invoice_number: format!("INV-{}", invoice_id),
            contractor_id: 1,
            contractor_name: Some("Acme Heating".to_string()),
            amount_pence,
            can_pay,
            block_reason: reason.map(str::to_string),
        }
    }

    fn sample_checks() -> Vec<PaymentBlockCheck> {
        vec![
            check(1, 12_500, true, None),
            check(2, 4_000, false, Some("Gas Safe certificate expired")),
            check(3, 9_999, true, None),
            check(4, 1, false, None),
        ]
    }

    #[test]
    fn partitions_checks_into_disjoint_covering_sets() {
        let checks = sample_checks();
        let all_ids: HashSet<i32> = checks.iter().map(|c| c.invoice_id).collect();

        let plan = PaymentRunPlan::classify(checks);

        let approved: HashSet<i32> = plan.approved.iter().map(|i| i.invoice_id).collect();
        let blocked: HashSet<i32> = plan.blocked.iter().map(|i| i.invoice_id).collect();
        assert!(approved.is_disjoint(&blocked));
        assert_eq!(&approved | &blocked, all_ids);
        assert_eq!(plan.total_invoices(), 4);
    }

    #[test]
    fn amounts_sum_to_total_processed() {
        let checks = sample_checks();
        let total: i64 = checks.iter().map(|c| c.amount_pence).sum();

        let plan = PaymentRunPlan::classify(checks);

        assert_eq!(plan.approved_amount(), 12_500 + 9_999);
        assert_eq!(plan.blocked_amount(), 4_001);
        assert_eq!(plan.approved_amount() + plan.blocked_amount(), total);
    }

    #[test]
    fn blocked_invoice_keeps_reason_or_gets_default() {
        let plan = PaymentRunPlan::classify(sample_checks());

        assert_eq!(
            plan.blocked[0].block_reason.as_deref(),
            Some("Gas Safe certificate expired")
        );
        assert_eq!(plan.blocked[1].block_reason.as_deref(), Some(DEFAULT_BLOCK_REASON));
        assert!(plan.approved.iter().all(|i| i.block_reason.is_none()));
    }

    #[test]
    fn empty_input_yields_empty_plan() {
        let plan = PaymentRunPlan::classify(Vec::new());

        assert!(plan.is_empty());
        assert_eq!(plan.approved_amount(), 0);
        assert_eq!(plan.blocked_amount(), 0);
    }

    #[test]
    fn outcome_dto_reports_totals() {
        let outcome = PaymentRunOutcome {
            run_id: Some(7),
            applied: PaymentRunPlan::classify(sample_checks()),
        };

        let dto = outcome.into_dto();

        assert_eq!(dto.run_id, Some(7));
        assert_eq!(dto.processed, 4);
        assert_eq!(dto.approved_count, 2);
        assert_eq!(dto.blocked_count, 2);
        assert_eq!(
            dto.total_amount_pence,
            dto.approved_amount_pence + dto.blocked_amount_pence
        );
        assert_eq!(dto.blocked_invoices.len(), 2);
    }
}
