pub mod prelude;

pub mod activity_log;
pub mod compliance_document;
pub mod contractor;
pub mod gas_safe_cache;
pub mod invoice;
pub mod payment_run;
pub mod payment_run_item;
pub mod user_profile;
pub mod verification_log;
