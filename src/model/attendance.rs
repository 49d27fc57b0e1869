use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{inscription::InscriptionDto, participation::ParticipationDto};

/// Optional body of the validate-entry and validate-exit endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateAttendanceDto {
    /// Attendee of a flash event; defaults to the caller.
    pub user_id: Option<Uuid>,
}

/// Which record a scanned code resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceKind {
    Inscription,
    Participation,
}

/// Successful validation result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceDto {
    pub valid: bool,
    pub message: String,
    pub kind: AttendanceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inscription: Option<InscriptionDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participation: Option<ParticipationDto>,
}
