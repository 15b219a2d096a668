//! Payment run orchestration.
//!
//! `preview` classifies the current pending invoices without writing anything. `execute`
//! repeats the classification inside a single transaction and applies it: invoice status
//! updates, run items, run totals and an activity entry either all commit or none do.

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::invoice::InvoiceStatus,
    server::{
        data::{
            activity_log::ActivityLogRepository, invoice::InvoiceRepository,
            payment_block::PaymentBlockRepository, payment_run::PaymentRunRepository,
        },
        error::AppError,
        model::{
            activity::CreateActivityParams,
            payment_run::{
                CreatePaymentRunItemParams, PaginatedPaymentRuns, PaymentRunDetail,
                PaymentRunOutcome, PaymentRunPlan, PaymentRunTotals, DEFAULT_BLOCK_REASON,
            },
        },
        util::pagination::total_pages,
    },
};

pub struct PaymentRunService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentRunService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Classifies every pending invoice without mutating anything.
    pub async fn preview(&self) -> Result<PaymentRunPlan, AppError> {
        let checks = PaymentBlockRepository::new(self.db)
            .get_pending_checks(Utc::now())
            .await?;

        Ok(PaymentRunPlan::classify(checks))
    }

    /// Executes a payment run on behalf of `processed_by`.
    ///
    /// Each invoice update only applies while the invoice is still `pending`; invoices
    /// claimed by a concurrent run are skipped and left out of the totals. When nothing
    /// is pending no run row is created.
    ///
    /// # Returns
    /// - `Ok(PaymentRunOutcome)` - What was applied, with the run ID if a run was recorded
    /// - `Err(AppError::DbErr)` - The transaction was rolled back
    pub async fn execute(&self, processed_by: i32) -> Result<PaymentRunOutcome, AppError> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let checks = PaymentBlockRepository::new(&txn)
            .get_pending_checks(now)
            .await?;

        let plan = PaymentRunPlan::classify(checks);

        if plan.is_empty() {
            txn.commit().await?;
            tracing::info!("Payment run by user {}: no pending invoices", processed_by);

            return Ok(PaymentRunOutcome {
                run_id: None,
                applied: plan,
            });
        }

        let run_repo = PaymentRunRepository::new(&txn);
        let invoice_repo = InvoiceRepository::new(&txn);

        let run = run_repo
            .create(processed_by, plan.total_invoices() as i32, now)
            .await?;

        let mut applied = PaymentRunPlan::default();

        for invoice in plan.approved {
            if !invoice_repo.mark_approved(invoice.invoice_id, now).await? {
                tracing::warn!(
                    "Payment run {}: invoice {} no longer pending, skipped",
                    run.id,
                    invoice.invoice_id
                );
                continue;
            }

            run_repo
                .add_item(CreatePaymentRunItemParams {
                    payment_run_id: run.id,
                    invoice_id: invoice.invoice_id,
                    amount_pence: invoice.amount_pence,
                    status: InvoiceStatus::Approved,
                    block_reason: None,
                })
                .await?;
            applied.approved.push(invoice);
        }

        for invoice in plan.blocked {
            let reason = invoice
                .block_reason
                .clone()
                .unwrap_or_else(|| DEFAULT_BLOCK_REASON.to_string());

            if !invoice_repo
                .mark_blocked(invoice.invoice_id, &reason, now)
                .await?
            {
                tracing::warn!(
                    "Payment run {}: invoice {} no longer pending, skipped",
                    run.id,
                    invoice.invoice_id
                );
                continue;
            }

            run_repo
                .add_item(CreatePaymentRunItemParams {
                    payment_run_id: run.id,
                    invoice_id: invoice.invoice_id,
                    amount_pence: invoice.amount_pence,
                    status: InvoiceStatus::Blocked,
                    block_reason: Some(reason),
                })
                .await?;
            applied.blocked.push(invoice);
        }

        let totals = PaymentRunTotals::from_plan(&applied);
        run_repo.complete(run.id, totals, now).await?;

        ActivityLogRepository::new(&txn)
            .create(CreateActivityParams::new(
                Some(processed_by),
                "payment_run_completed",
                "payment_run",
                Some(run.id),
                format!(
                    "Payment run {} approved {} and blocked {} invoices",
                    run.id, totals.approved_count, totals.blocked_count
                ),
            ))
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Payment run {} by user {}: {} approved ({}p), {} blocked ({}p)",
            run.id,
            processed_by,
            totals.approved_count,
            totals.approved_amount_pence,
            totals.blocked_count,
            totals.blocked_amount_pence
        );

        Ok(PaymentRunOutcome {
            run_id: Some(run.id),
            applied,
        })
    }

    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedPaymentRuns, AppError> {
        let (runs, total) = PaymentRunRepository::new(self.db)
            .get_paginated(page, per_page)
            .await?;

        Ok(PaginatedPaymentRuns {
            runs,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// Gets a run with its items.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No run with that ID
    pub async fn get_by_id(&self, id: i32) -> Result<PaymentRunDetail, AppError> {
        PaymentRunRepository::new(self.db)
            .find_with_items(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Payment run {} not found", id)))
    }
}
