use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::EventType;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Pricing category of an inscription tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TierType {
    Full,
    Half,
    Free,
    Promotional,
    Vip,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InscriptionTierDto {
    pub price: f64,
    #[serde(rename = "type")]
    pub tier_type: TierType,
    #[serde(default)]
    pub discount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDto {
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
}

/// Capacity counters. Only `max` is honored on input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityDto {
    pub max: i32,
    #[serde(default)]
    pub current: i32,
    #[serde(default)]
    pub total: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulesDto {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateTemplateDto {
    pub template_name: String,
    pub course_name: String,
    pub course_description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentDto {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: String,
    pub categories: Vec<String>,
    pub date: DateTime<Utc>,
    pub location: LocationDto,
    pub capacity: CapacityDto,
    pub schedules: SchedulesDto,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub inscription_tiers: Vec<InscriptionTierDto>,
    pub certificates: bool,
    pub certificate_template: CertificateTemplateDto,
    pub contents: Vec<ContentDto>,
    pub entry_qr_code: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventDto {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub categories: Vec<String>,
    pub date: DateTime<Utc>,
    pub location: LocationDto,
    pub capacity: CapacityDto,
    pub schedules: SchedulesDto,
    #[serde(rename = "type")]
    pub event_type: EventType,
    #[serde(default)]
    pub inscription_tiers: Vec<InscriptionTierDto>,
    #[serde(default)]
    pub certificates: bool,
    pub certificate_template: CertificateTemplateDto,
    #[serde(default)]
    pub contents: Vec<ContentDto>,
    #[serde(default)]
    pub entry_qr_code: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub categories: Option<Vec<String>>,
    pub date: Option<DateTime<Utc>>,
    pub location: Option<LocationDto>,
    pub capacity_max: Option<i32>,
    pub schedules: Option<SchedulesDto>,
    pub inscription_tiers: Option<Vec<InscriptionTierDto>>,
    pub certificates: Option<bool>,
    pub certificate_template: Option<CertificateTemplateDto>,
    pub contents: Option<Vec<ContentDto>>,
}
