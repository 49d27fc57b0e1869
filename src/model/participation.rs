use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::ParticipationStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::inscription::{AvaliationDto, CheckinDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipationDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub event_id: Uuid,
    pub name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub document: String,
    pub status: ParticipationStatus,
    pub checkin: CheckinDto,
    pub avaliation: AvaliationDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateParticipationDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub document: Option<String>,
    pub avaliation: Option<AvaliationDto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipationQuery {
    pub event_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
}
