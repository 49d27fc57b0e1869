use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::maintenance::MaintenanceService};

/// Every five minutes, on the minute.
const MAINTENANCE_SCHEDULE: &str = "0 */5 * * * *";

/// Starts the maintenance scheduler.
///
/// Each run:
/// - Purges verification codes past their expiry
/// - Expires PENDING and CONFIRMED inscriptions of finished events that never checked in,
///   marking them NO_SHOW
///
/// # Arguments
/// - `db`: Database connection
pub async fn start_scheduler(db: DatabaseConnection) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(MAINTENANCE_SCHEDULE, move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            match MaintenanceService::new(&db).run(Utc::now()).await {
                Ok(report) => {
                    if report.purged_codes > 0 || report.expired_inscriptions > 0 {
                        tracing::info!(
                            purged_codes = report.purged_codes,
                            expired_inscriptions = report.expired_inscriptions,
                            "Maintenance run completed"
                        );
                    }
                }
                Err(e) => tracing::error!("Error running maintenance: {}", e),
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Maintenance scheduler started");

    Ok(())
}
