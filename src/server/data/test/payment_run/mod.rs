use crate::{
    model::invoice::InvoiceStatus,
    server::{
        data::payment_run::PaymentRunRepository,
        error::AppError,
        model::payment_run::{CreatePaymentRunItemParams, PaymentRunTotals},
    },
};
use chrono::Utc;
use test_utils::{builder::TestBuilder, factory};

mod complete;
mod get_paginated;
