use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Tables are generated from SeaORM entities using the SQLite backend and created in the
/// order they were added, so add referenced tables before the tables pointing at them.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Contractor, Invoice};
///
/// let test = TestBuilder::new()
///     .with_table(Contractor)
///     .with_table(Invoice)
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// CREATE TABLE statements executed during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the contractor and compliance document tables.
    ///
    /// Use for tests that only touch contractors and their documents.
    pub fn with_contractor_tables(self) -> Self {
        self.with_table(Contractor).with_table(ComplianceDocument)
    }

    /// Adds every table the payment run touches.
    ///
    /// Tables are added in dependency order:
    /// - UserProfile
    /// - Contractor
    /// - ComplianceDocument
    /// - Invoice
    /// - PaymentRun
    /// - PaymentRunItem
    /// - ActivityLog
    pub fn with_payment_tables(self) -> Self {
        self.with_table(UserProfile)
            .with_contractor_tables()
            .with_table(Invoice)
            .with_table(PaymentRun)
            .with_table(PaymentRunItem)
            .with_table(ActivityLog)
    }

    /// Adds the full application schema.
    ///
    /// Equivalent to `with_payment_tables()` plus the Gas Safe cache and the
    /// verification audit log.
    pub fn with_compliance_tables(self) -> Self {
        self.with_payment_tables()
            .with_table(GasSafeCache)
            .with_table(VerificationLog)
    }

    /// Builds the test context and creates all configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized context with an in-memory database
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
