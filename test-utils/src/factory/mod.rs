//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` struct for customization and a `create_*` convenience
//! function for quick default creation. Factories insert directly through SeaORM active
//! models, so the tables must exist in the test database first.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let admin = factory::user_profile::create_admin(&db).await?;
//! let contractor = factory::helpers::create_compliant_contractor(&db).await?;
//! let invoice = factory::invoice::InvoiceFactory::new(&db, contractor.id)
//!     .amount_pence(125_00)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user_profile` - Signed-in users with a role
//! - `contractor` - Contractors
//! - `compliance_document` - Contractor compliance documents
//! - `invoice` - Contractor invoices
//! - `gas_safe_cache` - Cached Gas Safe register lookups
//! - `helpers` - ID generation and multi-entity helpers

pub mod compliance_document;
pub mod contractor;
pub mod gas_safe_cache;
pub mod helpers;
pub mod invoice;
pub mod user_profile;

pub use compliance_document::create_verified_document;
pub use contractor::create_contractor;
pub use invoice::create_invoice;
pub use user_profile::{create_admin, create_user};
