//! Inscription factory for creating test inscription entities.

use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::{InscriptionStatus, ParticipationStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test inscriptions with customizable status fields.
///
/// The factory does not touch the event's capacity counters; tests that care about
/// capacity go through the inscription service instead.
pub struct InscriptionFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Uuid,
    event_id: Uuid,
    status: InscriptionStatus,
    participation_status: ParticipationStatus,
    checkin_in: Option<DateTime<Utc>>,
}

impl<'a> InscriptionFactory<'a> {
    /// Creates a new InscriptionFactory for a pending, not yet attended inscription.
    pub fn new(db: &'a DatabaseConnection, user_id: Uuid, event_id: Uuid) -> Self {
        Self {
            db,
            user_id,
            event_id,
            status: InscriptionStatus::Pending,
            participation_status: ParticipationStatus::Pending,
            checkin_in: None,
        }
    }

    pub fn status(mut self, status: InscriptionStatus) -> Self {
        self.status = status;
        self
    }

    pub fn participation_status(mut self, participation_status: ParticipationStatus) -> Self {
        self.participation_status = participation_status;
        self
    }

    pub fn checkin_in(mut self, checkin_in: DateTime<Utc>) -> Self {
        self.checkin_in = Some(checkin_in);
        self
    }

    /// Builds and inserts the inscription entity into the database.
    pub async fn build(self) -> Result<entity::inscription::Model, DbErr> {
        let now = Utc::now();
        entity::inscription::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(self.user_id),
            event_id: ActiveValue::Set(self.event_id),
            for_another_one: ActiveValue::Set(false),
            participant_name: ActiveValue::Set("Participant Tester".to_string()),
            participant_email: ActiveValue::Set("participant@example.com".to_string()),
            participant_date_of_birth: ActiveValue::Set(
                NaiveDate::from_ymd_opt(1990, 1, 1).unwrap_or_default(),
            ),
            participant_document: ActiveValue::Set("123.456.789-00".to_string()),
            status: ActiveValue::Set(self.status),
            participation_status: ActiveValue::Set(self.participation_status),
            checkin_in: ActiveValue::Set(self.checkin_in),
            checkin_out: ActiveValue::Set(None),
            certificate_document: ActiveValue::Set(None),
            certificate_status: ActiveValue::Set(None),
            avaliation_note: ActiveValue::Set(None),
            avaliation_comment: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending inscription of `user_id` to `event_id`.
pub async fn create_inscription(
    db: &DatabaseConnection,
    user_id: Uuid,
    event_id: Uuid,
) -> Result<entity::inscription::Model, DbErr> {
    InscriptionFactory::new(db, user_id, event_id).build().await
}
