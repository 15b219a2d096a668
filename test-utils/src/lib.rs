//! Compliance Board Test Utils
//!
//! Provides shared testing utilities for building repository, service and handler tests
//! for the compliance board backend. This crate offers a builder pattern for creating test
//! contexts with in-memory SQLite databases and entity factories with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories for users, contractors, documents and invoices
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_invoice_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_compliance_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
