//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the service boundary and transformed
//! to DTOs at the controller boundary. Pure business rules (payment-block assessment,
//! payment-run classification, licence normalization) live here so they can be tested
//! without a database.

pub mod activity;
pub mod compliance;
pub mod dashboard;
pub mod gas_safe;
pub mod invoice;
pub mod payment_run;
pub mod user;
