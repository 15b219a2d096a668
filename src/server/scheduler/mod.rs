//! Background cron jobs.

pub mod compliance_expiry;
