//! Service layer for business logic and orchestration.
//!
//! Services sit between controllers and repositories. They validate inputs that need the
//! database, coordinate several repositories, own transactions, and work with domain
//! models rather than DTOs or entity models.

pub mod auth;
pub mod compliance;
pub mod dashboard;
pub mod gas_safe;
pub mod invoice;
pub mod payment_run;
pub mod user;

#[cfg(test)]
mod test;
