use entity::sea_orm_active_enums::OrganizerLevel;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizerDto {
    pub event_id: Uuid,
    pub user_id: Uuid,
    pub nivel: OrganizerLevel,
}

/// Body of the add and update organizer endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizerPayloadDto {
    pub user_id: Uuid,
    pub nivel: OrganizerLevel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveOrganizerDto {
    pub user_id: Uuid,
}
