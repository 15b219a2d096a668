mod activity_log;
mod compliance_document;
mod gas_safe_cache;
mod invoice;
mod payment_run;
mod user;
