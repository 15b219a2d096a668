//! Database repository layer.
//!
//! Repositories wrap SeaORM queries for one table (or one derived view) each and return
//! domain models from `server::model`. They are generic over `ConnectionTrait` so the same
//! repository works on a `DatabaseConnection` or inside a `DatabaseTransaction`.

pub mod activity_log;
pub mod compliance_document;
pub mod contractor;
pub mod gas_safe_cache;
pub mod invoice;
pub mod payment_block;
pub mod payment_run;
pub mod user;
pub mod verification_log;

#[cfg(test)]
mod test;
