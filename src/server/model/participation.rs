//! Flash event participation domain models.

use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::ParticipationStatus;
use uuid::Uuid;

use crate::{
    model::{
        inscription::{AvaliationDto, CheckinDto},
        participation::{ParticipationDto, UpdateParticipationDto},
    },
    server::model::{
        inscription::Avaliation,
        user::{is_plausible_email, normalize_email},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Participation {
    pub id: Uuid,
    pub user_id: Uuid,
    pub event_id: Uuid,
    pub name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub document: String,
    pub status: ParticipationStatus,
    pub checkin_in: Option<DateTime<Utc>>,
    pub checkin_out: Option<DateTime<Utc>>,
    pub avaliation_note: Option<f64>,
    pub avaliation_comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Participation {
    pub fn from_entity(entity: entity::participation::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            event_id: entity.event_id,
            name: entity.name,
            email: entity.email,
            date_of_birth: entity.date_of_birth,
            document: entity.document,
            status: entity.status,
            checkin_in: entity.checkin_in,
            checkin_out: entity.checkin_out,
            avaliation_note: entity.avaliation_note,
            avaliation_comment: entity.avaliation_comment,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ParticipationDto {
        ParticipationDto {
            id: self.id,
            user_id: self.user_id,
            event_id: self.event_id,
            name: self.name,
            email: self.email,
            date_of_birth: self.date_of_birth,
            document: self.document,
            status: self.status,
            checkin: CheckinDto {
                entered_at: self.checkin_in,
                left_at: self.checkin_out,
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

/// Attendee data copied onto a participation created at first check-in.
#[derive(Debug, Clone)]
pub struct NewParticipationParams {
    pub user_id: Uuid,
    pub event_id: Uuid,
    pub name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub document: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateParticipationParams {
    pub name: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub document: Option<String>,
    pub avaliation: Option<Avaliation>,
}

impl UpdateParticipationParams {
    /// Validates and converts the update body.
    pub fn from_dto(dto: UpdateParticipationDto) -> Result<Self, String> {
        let email = match dto.email {
            Some(email) => {
                let email = normalize_email(&email);
                if !is_plausible_email(&email) {
                    return Err("Invalid email".to_string());
                }
                Some(email)
            }
            None => None,
        };

        let avaliation = match dto.avaliation {
            Some(AvaliationDto {
                note: Some(note),
                comment,
            }) => Some(Avaliation::new(note, comment)?),
            Some(AvaliationDto { note: None, .. }) => {
                return Err("Avaliation note is required".to_string())
            }
            None => None,
        };

        Ok(Self {
            name: dto.name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty()),
            email,
            date_of_birth: dto.date_of_birth,
            document: dto
                .document
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
            avaliation,
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ParticipationFilter {
    pub event_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
}
