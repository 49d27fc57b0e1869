//! Periodic housekeeping run by the scheduler.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{inscription::InscriptionRepository, verification_code::VerificationCodeRepository},
    error::AppError,
};

/// Counts of records touched by one maintenance run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaintenanceReport {
    pub purged_codes: u64,
    pub expired_inscriptions: u64,
}

pub struct MaintenanceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MaintenanceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Purges expired verification codes and expires never-attended inscriptions of
    /// finished events.
    pub async fn run(&self, now: DateTime<Utc>) -> Result<MaintenanceReport, AppError> {
        let purged_codes = VerificationCodeRepository::new(self.db)
            .purge_expired(now)
            .await?;
        let expired_inscriptions = InscriptionRepository::new(self.db)
            .expire_no_shows(now)
            .await?;

        Ok(MaintenanceReport {
            purged_codes,
            expired_inscriptions,
        })
    }
}
