use sea_orm::DatabaseConnection;

use crate::{
    model::invoice::InvoiceStatus,
    server::{
        data::invoice::InvoiceRepository, error::AppError, model::invoice::PaginatedInvoices,
        util::pagination::total_pages,
    },
};

pub struct InvoiceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InvoiceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(
        &self,
        status: Option<InvoiceStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedInvoices, AppError> {
        let (invoices, total) = InvoiceRepository::new(self.db)
            .get_paginated(status, page, per_page)
            .await?;

        Ok(PaginatedInvoices {
            invoices,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }
}
