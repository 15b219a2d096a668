use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    data::gas_safe_cache::GasSafeCacheRepository, error::AppError,
    model::gas_safe::freshness_cutoff, service::compliance::ComplianceService,
};

/// Every day at 02:00 UTC.
const DAILY_AT_TWO: &str = "0 0 2 * * *";

/// Starts the daily compliance maintenance job.
///
/// The job expires compliance documents whose expiry date has passed and deletes Gas
/// Safe cache rows older than the freshness window.
///
/// # Arguments
/// - `db`: Database connection
pub async fn start_scheduler(db: DatabaseConnection) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();
    let job = Job::new_async(DAILY_AT_TWO, move |_uuid, _lock| {
        let db = job_db.clone();

        Box::pin(async move {
            if let Err(e) = run_maintenance(&db).await {
                tracing::error!("Error running compliance maintenance: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Compliance maintenance scheduler started");

    Ok(scheduler)
}

/// Runs one maintenance pass.
///
/// Both steps run even if the first fails.
pub async fn run_maintenance(db: &DatabaseConnection) -> Result<(), AppError> {
    let now = Utc::now();

    match ComplianceService::new(db).expire_overdue(now).await {
        Ok(0) => tracing::debug!("No compliance documents to expire"),
        Ok(count) => tracing::info!("Expired {} compliance documents", count),
        Err(e) => tracing::error!("Error expiring compliance documents: {}", e),
    }

    let purged = GasSafeCacheRepository::new(db)
        .delete_stale(freshness_cutoff(now))
        .await?;
    if purged > 0 {
        tracing::info!("Purged {} stale Gas Safe cache entries", purged);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use sea_orm::{EntityTrait, PaginatorTrait};
    use test_utils::{builder::TestBuilder, factory};

    use super::*;

    /// Tests a maintenance pass expires overdue documents and purges stale cache rows.
    ///
    /// Expected: Ok with the overdue document expired and only the fresh cache row left
    #[tokio::test]
    async fn expires_documents_and_purges_cache() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_compliance_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let contractor = factory::create_contractor(db).await?;
        let overdue =
            factory::compliance_document::ComplianceDocumentFactory::new(db, contractor.id)
                .status("verified")
                .expires_at(Some(Utc::now() - Duration::days(2)))
                .build()
                .await?;
        factory::gas_safe_cache::GasSafeCacheFactory::new(db, "1234567")
            .fetched_at(Utc::now() - Duration::hours(30))
            .build()
            .await?;
        factory::gas_safe_cache::GasSafeCacheFactory::new(db, "7654321")
            .build()
            .await?;

        run_maintenance(db).await?;

        let document = entity::prelude::ComplianceDocument::find_by_id(overdue.id)
            .one(db)
            .await?
            .unwrap();
        assert_eq!(document.status, "expired");
        assert_eq!(entity::prelude::GasSafeCache::find().count(db).await?, 1);

        Ok(())
    }
}
