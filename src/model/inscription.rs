use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::{InscriptionStatus, ParticipationStatus};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub document: String,
}

/// Participant fields as sent on creation; all are required when registering someone else.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantInputDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub document: Option<String>,
}

/// Entry and exit timestamps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckinDto {
    #[serde(rename = "in")]
    pub entered_at: Option<DateTime<Utc>>,
    #[serde(rename = "out")]
    pub left_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CertificateDto {
    pub document: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AvaliationDto {
    pub note: Option<f64>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InscriptionDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub event_id: Uuid,
    pub for_another_one: bool,
    pub participants: ParticipantDto,
    pub status: InscriptionStatus,
    #[serde(rename = "participation_status")]
    pub participation_status: ParticipationStatus,
    pub checkin: CheckinDto,
    pub certificate: CertificateDto,
    pub avaliation: AvaliationDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInscriptionDto {
    pub event_id: Uuid,
    /// Defaults to the authenticated caller.
    #[serde(default)]
    pub user_id: Option<Uuid>,
    #[serde(default)]
    pub for_another_one: bool,
    #[serde(default)]
    pub participants: ParticipantInputDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateDto {
    pub note: f64,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Optional list filters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InscriptionQuery {
    pub event_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
}
