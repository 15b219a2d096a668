use crate::{
    model::compliance::{DocumentStatus, ReviewDecision},
    server::{
        data::compliance_document::ComplianceDocumentRepository,
        error::AppError,
        model::compliance::{ComplianceDocument, DocumentFilter, ReviewDocumentParams},
    },
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod expire_overdue;
mod get_expiring_between;
mod get_paginated;
mod review;
