//! Request and response DTOs exchanged over the HTTP API.
//!
//! Every response body is wrapped in the `ApiResponse` envelope from `api`.

pub mod api;
pub mod compliance;
pub mod dashboard;
pub mod gas_safe;
pub mod invoice;
pub mod payment_run;
pub mod user;
