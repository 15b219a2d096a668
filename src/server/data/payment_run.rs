//! Payment run repository.
//!
//! A run row is created `in_progress`, receives one item per classified invoice, and is
//! completed with its totals. The service drives all three steps inside one transaction.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::payment_run::{
        CreatePaymentRunItemParams, PaymentRun, PaymentRunDetail, PaymentRunItem,
        PaymentRunStatus, PaymentRunTotals,
    },
};

pub struct PaymentRunRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PaymentRunRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an in-progress run with zero totals.
    ///
    /// # Arguments
    /// - `processed_by` - ID of the user starting the run
    /// - `total_invoices` - Number of pending invoices the run will classify
    /// - `now` - Run date
    pub async fn create(
        &self,
        processed_by: i32,
        total_invoices: i32,
        now: DateTime<Utc>,
    ) -> Result<PaymentRun, AppError> {
        let entity = entity::payment_run::ActiveModel {
            run_date: ActiveValue::Set(now),
            status: ActiveValue::Set(PaymentRunStatus::InProgress.as_str().to_string()),
            total_invoices: ActiveValue::Set(total_invoices),
            approved_count: ActiveValue::Set(0),
            blocked_count: ActiveValue::Set(0),
            approved_amount_pence: ActiveValue::Set(0),
            blocked_amount_pence: ActiveValue::Set(0),
            processed_by: ActiveValue::Set(processed_by),
            completed_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(PaymentRun::from_entity(entity))
    }

    pub async fn add_item(&self, params: CreatePaymentRunItemParams) -> Result<(), AppError> {
        entity::payment_run_item::ActiveModel {
            payment_run_id: ActiveValue::Set(params.payment_run_id),
            invoice_id: ActiveValue::Set(params.invoice_id),
            amount_pence: ActiveValue::Set(params.amount_pence),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            block_reason: ActiveValue::Set(params.block_reason),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Writes final totals and marks the run completed.
    ///
    /// `total_invoices` is rewritten from the totals so it only counts applied invoices.
    pub async fn complete(
        &self,
        id: i32,
        totals: PaymentRunTotals,
        now: DateTime<Utc>,
    ) -> Result<PaymentRun, AppError> {
        let Some(existing) = entity::prelude::PaymentRun::find_by_id(id).one(self.db).await?
        else {
            return Err(AppError::NotFound(format!("Payment run {} not found", id)));
        };

        let mut run: entity::payment_run::ActiveModel = existing.into();
        run.status = ActiveValue::Set(PaymentRunStatus::Completed.as_str().to_string());
        run.total_invoices = ActiveValue::Set(totals.approved_count + totals.blocked_count);
        run.approved_count = ActiveValue::Set(totals.approved_count);
        run.blocked_count = ActiveValue::Set(totals.blocked_count);
        run.approved_amount_pence = ActiveValue::Set(totals.approved_amount_pence);
        run.blocked_amount_pence = ActiveValue::Set(totals.blocked_amount_pence);
        run.completed_at = ActiveValue::Set(Some(now));

        let updated = run.update(self.db).await?;

        Ok(PaymentRun::from_entity(updated))
    }

    /// Gets a page of runs, newest first.
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<PaymentRun>, u64), AppError> {
        let paginator = entity::prelude::PaymentRun::find()
            .order_by_desc(entity::payment_run::Column::RunDate)
            .order_by_desc(entity::payment_run::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let runs = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(PaymentRun::from_entity)
            .collect();

        Ok((runs, total))
    }

    /// Gets a run together with its items in insertion order.
    pub async fn find_with_items(&self, id: i32) -> Result<Option<PaymentRunDetail>, AppError> {
        let Some(run) = entity::prelude::PaymentRun::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let items = entity::prelude::PaymentRunItem::find()
            .filter(entity::payment_run_item::Column::PaymentRunId.eq(id))
            .order_by_asc(entity::payment_run_item::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(PaymentRunItem::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(PaymentRunDetail {
            run: PaymentRun::from_entity(run),
            items,
        }))
    }
}
