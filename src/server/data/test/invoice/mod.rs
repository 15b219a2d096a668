use crate::{
    model::invoice::InvoiceStatus,
    server::{data::invoice::InvoiceRepository, error::AppError},
};
use chrono::Utc;
use test_utils::{builder::TestBuilder, factory};

mod get_blocked;
mod mark_status;
