//! Inscription fixtures for creating in-memory test data.

use chrono::{NaiveDate, TimeZone, Utc};
use entity::{
    inscription,
    sea_orm_active_enums::{InscriptionStatus, ParticipationStatus},
};
use uuid::Uuid;

/// Default participant name.
pub const DEFAULT_PARTICIPANT_NAME: &str = "Maria Silva";

/// Creates a pending, not yet attended inscription with default values.
pub fn entity() -> inscription::Model {
    entity_builder().build()
}

/// Creates a builder for customizing an inscription entity model.
pub fn entity_builder() -> InscriptionEntityBuilder {
    InscriptionEntityBuilder {
        status: InscriptionStatus::Pending,
        participation_status: ParticipationStatus::Pending,
    }
}

/// Builder for in-memory inscription entity models.
pub struct InscriptionEntityBuilder {
    status: InscriptionStatus,
    participation_status: ParticipationStatus,
}

impl InscriptionEntityBuilder {
    pub fn status(mut self, status: InscriptionStatus) -> Self {
        self.status = status;
        self
    }

    pub fn participation_status(mut self, participation_status: ParticipationStatus) -> Self {
        self.participation_status = participation_status;
        self
    }

    /// Builds the entity model. Timestamps of entry and exit follow the participation status.
    pub fn build(self) -> inscription::Model {
        let created = Utc
            .with_ymd_and_hms(2030, 3, 1, 12, 0, 0)
            .single()
            .unwrap_or_else(Utc::now);
        let entered = matches!(
            self.participation_status,
            ParticipationStatus::Checkin | ParticipationStatus::Checkout
        );

        inscription::Model {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            event_id: Uuid::new_v4(),
            for_another_one: false,
            participant_name: DEFAULT_PARTICIPANT_NAME.to_string(),
            participant_email: "maria@example.com".to_string(),
            participant_date_of_birth: NaiveDate::from_ymd_opt(1992, 7, 14).unwrap_or_default(),
            participant_document: "123.456.789-09".to_string(),
            status: self.status,
            participation_status: self.participation_status,
            checkin_in: entered.then_some(created),
            checkin_out: (self.participation_status == ParticipationStatus::Checkout)
                .then_some(created),
            certificate_document: None,
            certificate_status: None,
            avaliation_note: None,
            avaliation_comment: None,
            created_at: created,
            updated_at: created,
        }
    }
}
