//! Invoice repository.
//!
//! Status changes made by a payment run are conditional on the invoice still being
//! `pending`, so an invoice claimed by a concurrent run is reported back as untouched.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    model::invoice::InvoiceStatus,
    server::{
        error::AppError,
        model::invoice::{Invoice, PaymentBlock},
    },
};

pub struct InvoiceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> InvoiceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Invoice>, AppError> {
        entity::prelude::Invoice::find_by_id(id)
            .one(self.db)
            .await?
            .map(Invoice::from_entity)
            .transpose()
    }

    /// Gets a page of invoices, newest first, optionally filtered by status.
    pub async fn get_paginated(
        &self,
        status: Option<InvoiceStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Invoice>, u64), AppError> {
        let mut query = entity::prelude::Invoice::find();
        if let Some(status) = status {
            query = query.filter(entity::invoice::Column::Status.eq(status.as_str()));
        }

        let paginator = query
            .order_by_desc(entity::invoice::Column::CreatedAt)
            .order_by_desc(entity::invoice::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let invoices = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Invoice::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((invoices, total))
    }

    /// Gets every pending invoice in creation order.
    pub async fn get_pending(&self) -> Result<Vec<entity::invoice::Model>, AppError> {
        let invoices = entity::prelude::Invoice::find()
            .filter(entity::invoice::Column::Status.eq(InvoiceStatus::Pending.as_str()))
            .order_by_asc(entity::invoice::Column::Id)
            .all(self.db)
            .await?;

        Ok(invoices)
    }

    /// Approves a pending invoice and clears any earlier block reason.
    ///
    /// # Returns
    /// - `Ok(true)` - The invoice was pending and is now approved
    /// - `Ok(false)` - The invoice no longer exists or is not pending
    pub async fn mark_approved(&self, id: i32, now: DateTime<Utc>) -> Result<bool, AppError> {
        self.transition_pending(id, InvoiceStatus::Approved, None, now)
            .await
    }

    /// Blocks a pending invoice with a reason.
    ///
    /// # Returns
    /// - `Ok(true)` - The invoice was pending and is now blocked
    /// - `Ok(false)` - The invoice no longer exists or is not pending
    pub async fn mark_blocked(
        &self,
        id: i32,
        reason: &str,
        now: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        self.transition_pending(id, InvoiceStatus::Blocked, Some(reason.to_string()), now)
            .await
    }

    async fn transition_pending(
        &self,
        id: i32,
        status: InvoiceStatus,
        reason: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        let result = entity::prelude::Invoice::update_many()
            .col_expr(entity::invoice::Column::Status, Expr::value(status.as_str()))
            .col_expr(entity::invoice::Column::PaymentBlockReason, Expr::value(reason))
            .col_expr(entity::invoice::Column::ComplianceCheckAt, Expr::value(now))
            .filter(entity::invoice::Column::Id.eq(id))
            .filter(entity::invoice::Column::Status.eq(InvoiceStatus::Pending.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    pub async fn count_by_status(&self, status: InvoiceStatus) -> Result<u64, AppError> {
        let count = entity::prelude::Invoice::find()
            .filter(entity::invoice::Column::Status.eq(status.as_str()))
            .count(self.db)
            .await?;

        Ok(count)
    }

    /// Gets blocked invoices with their contractor's name, most recently checked first.
    pub async fn get_blocked(&self) -> Result<Vec<PaymentBlock>, AppError> {
        let rows = entity::prelude::Invoice::find()
            .find_also_related(entity::prelude::Contractor)
            .filter(entity::invoice::Column::Status.eq(InvoiceStatus::Blocked.as_str()))
            .order_by_desc(entity::invoice::Column::ComplianceCheckAt)
            .order_by_desc(entity::invoice::Column::Id)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(invoice, contractor)| {
                Ok(PaymentBlock {
                    invoice: Invoice::from_entity(invoice)?,
                    contractor_name: contractor.map(|c| c.name),
                })
            })
            .collect()
    }
}
