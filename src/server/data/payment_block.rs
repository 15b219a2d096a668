//! Payment-block checks for pending invoices.
//!
//! Produces one `PaymentBlockCheck` per pending invoice from the invoice, its contractor
//! and the contractor's compliance documents, evaluated at a single instant.

use chrono::{DateTime, Utc};
use sea_orm::ConnectionTrait;
use std::collections::{BTreeSet, HashMap};

use crate::server::{
    data::{
        compliance_document::ComplianceDocumentRepository, contractor::ContractorRepository,
        invoice::InvoiceRepository,
    },
    error::AppError,
    model::{compliance::ComplianceDocument, payment_run::PaymentBlockCheck},
};

pub struct PaymentBlockRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PaymentBlockRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the check for every pending invoice, in invoice creation order.
    pub async fn get_pending_checks(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<PaymentBlockCheck>, AppError> {
        let invoices = InvoiceRepository::new(self.db).get_pending().await?;
        if invoices.is_empty() {
            return Ok(Vec::new());
        }

        let contractor_ids: Vec<i32> = invoices
            .iter()
            .map(|invoice| invoice.contractor_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let contractors: HashMap<i32, entity::contractor::Model> =
            ContractorRepository::new(self.db)
                .find_by_ids(&contractor_ids)
                .await?
                .into_iter()
                .map(|contractor| (contractor.id, contractor))
                .collect();

        let mut documents: HashMap<i32, Vec<ComplianceDocument>> = HashMap::new();
        for document in ComplianceDocumentRepository::new(self.db)
            .get_by_contractor_ids(&contractor_ids)
            .await?
        {
            documents
                .entry(document.contractor_id)
                .or_default()
                .push(document);
        }

        Ok(invoices
            .iter()
            .map(|invoice| {
                PaymentBlockCheck::assess(
                    invoice,
                    contractors.get(&invoice.contractor_id),
                    documents
                        .get(&invoice.contractor_id)
                        .map(Vec::as_slice)
                        .unwrap_or_default(),
                    now,
                )
            })
            .collect())
    }
}
