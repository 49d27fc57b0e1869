//! Inscription domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::{InscriptionStatus, ParticipationStatus};
use uuid::Uuid;

use crate::{
    model::inscription::{
        AvaliationDto, CertificateDto, CheckinDto, InscriptionDto, ParticipantDto,
        ParticipantInputDto,
    },
    server::model::user::{is_plausible_email, normalize_email, User},
};

/// Person attending under an inscription. May differ from the registering user.
#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    pub name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub document: String,
}

impl Participant {
    /// Copies the participant data from the registering user.
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.full_name(),
            email: user.email.clone(),
            date_of_birth: user.date_of_birth,
            document: user.cpf.clone(),
        }
    }

    /// Builds a participant from explicitly provided fields.
    ///
    /// # Returns
    /// - `Ok(Participant)` - All fields present and non-blank
    /// - `Err(String)` - A field is missing or the email is malformed
    pub fn from_input(input: ParticipantInputDto) -> Result<Self, String> {
        const MISSING: &str =
            "All participant fields (name, email, dateOfBirth, document) are required when registering for another person";

        let non_blank = |value: Option<String>| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let name = non_blank(input.name).ok_or(MISSING)?;
        let email = non_blank(input.email).ok_or(MISSING)?;
        let document = non_blank(input.document).ok_or(MISSING)?;
        let date_of_birth = input.date_of_birth.ok_or(MISSING)?;

        let email = normalize_email(&email);
        if !is_plausible_email(&email) {
            return Err("Invalid participant email".to_string());
        }

        Ok(Self {
            name,
            email,
            date_of_birth,
            document,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Inscription {
    pub id: Uuid,
    pub user_id: Uuid,
    pub event_id: Uuid,
    pub for_another_one: bool,
    pub participant: Participant,
    pub status: InscriptionStatus,
    pub participation_status: ParticipationStatus,
    pub checkin_in: Option<DateTime<Utc>>,
    pub checkin_out: Option<DateTime<Utc>>,
    pub certificate_document: Option<String>,
    pub certificate_status: Option<String>,
    pub avaliation_note: Option<f64>,
    pub avaliation_comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Inscription {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::inscription::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            event_id: entity.event_id,
            for_another_one: entity.for_another_one,
            participant: Participant {
                name: entity.participant_name,
                email: entity.participant_email,
                date_of_birth: entity.participant_date_of_birth,
                document: entity.participant_document,
            },
            status: entity.status,
            participation_status: entity.participation_status,
            checkin_in: entity.checkin_in,
            checkin_out: entity.checkin_out,
            certificate_document: entity.certificate_document,
            certificate_status: entity.certificate_status,
            avaliation_note: entity.avaliation_note,
            avaliation_comment: entity.avaliation_comment,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Whether the inscription still holds a capacity slot of its event.
    pub fn holds_slot(&self) -> bool {
        self.status != InscriptionStatus::Canceled
    }

    pub fn into_dto(self) -> InscriptionDto {
        InscriptionDto {
            id: self.id,
            user_id: self.user_id,
            event_id: self.event_id,
            for_another_one: self.for_another_one,
            participants: ParticipantDto {
                name: self.participant.name,
                email: self.participant.email,
                date_of_birth: self.participant.date_of_birth,
                document: self.participant.document,
            },
            status: self.status,
            participation_status: self.participation_status,
            checkin: CheckinDto {
                entered_at: self.checkin_in,
                left_at: self.checkin_out,
            },
            certificate: CertificateDto {
                document: self.certificate_document,
                status: self.certificate_status,
            },
            avaliation: AvaliationDto {
                note: self.avaliation_note,
                comment: self.avaliation_comment,
            },
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Validated parameters for inserting an inscription.
#[derive(Debug, Clone)]
pub struct CreateInscriptionParams {
    pub user_id: Uuid,
    pub event_id: Uuid,
    pub for_another_one: bool,
    pub participant: Participant,
}

/// Filters for listing inscriptions.
#[derive(Debug, Clone, Copy, Default)]
pub struct InscriptionFilter {
    pub event_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
}

/// Rating left by an attendee.
#[derive(Debug, Clone, PartialEq)]
pub struct Avaliation {
    pub note: f64,
    pub comment: Option<String>,
}

impl Avaliation {
    /// Builds a rating, checking the note is within 0 to 5.
    pub fn new(note: f64, comment: Option<String>) -> Result<Self, String> {
        if !(0.0..=5.0).contains(&note) {
            return Err("Note must be between 0 and 5".to_string());
        }
        Ok(Self {
            note,
            comment: comment.filter(|c| !c.trim().is_empty()),
        })
    }
}
